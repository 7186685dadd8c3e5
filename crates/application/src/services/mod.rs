mod answer_synthesizer;
mod zone_classifier;

pub use answer_synthesizer::AnswerSynthesizer;
pub use zone_classifier::ZoneClassifier;
