mod common;

use common::{ask, Upstream, UpstreamBehavior, RunningServer};
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::{RData, RecordType};
use localdns_domain::{CliOverrides, Config, QuestionPolicy};
use std::net::{IpAddr, Ipv4Addr};

#[tokio::test]
async fn test_config_file_drives_zone_and_upstream() {
    let upstream = Upstream::start(UpstreamBehavior::Rcode(ResponseCode::Refused)).await;
    let toml = format!(
        r#"
[server]
listen_address = "172.16.4.2"
question_policy = "first"

[zone]
local_domain = "Home.Lan"
local_network = "172.16.4"
ttl = 120
ptr_hostname = "gateway"

[upstream]
servers = ["{}"]
query_timeout_ms = 500
"#,
        upstream.addr()
    );
    let config = Config::from_toml_str(&toml).unwrap();
    config.validate().unwrap();
    assert_eq!(config.server.question_policy, QuestionPolicy::First);

    let listen = Ipv4Addr::new(172, 16, 4, 2);
    let server = RunningServer::from_config(&config, listen).await;

    let a = ask(server.addr(), "nas.home.lan.", RecordType::A).await;
    assert_eq!(a.answers()[0].ttl(), 120);
    assert_eq!(a.answers()[0].data().ip_addr(), Some(IpAddr::V4(listen)));

    let ptr = ask(server.addr(), "9.4.16.172.in-addr.arpa.", RecordType::PTR).await;
    match ptr.answers()[0].data() {
        RData::PTR(target) => assert_eq!(target.0.to_ascii(), "gateway.home.lan."),
        other => panic!("expected PTR, got {:?}", other),
    }

    let forwarded = ask(server.addr(), "example.net.", RecordType::A).await;
    assert_eq!(forwarded.response_code(), ResponseCode::Refused);
    assert_eq!(upstream.hits(), 1);
}

#[tokio::test]
async fn test_cli_overrides_take_precedence_over_file() {
    let mut config = Config::from_toml_str(
        r#"
[zone]
local_domain = "file.lan"
ttl = 30
"#,
    )
    .unwrap();

    config.apply_cli_overrides(CliOverrides {
        local_domain: Some("cli.lan".to_string()),
        ttl: Some(90),
        nameservers: Some("127.0.0.1:5300".to_string()),
        ..Default::default()
    });
    config.validate().unwrap();

    let zone = config.zone_config(Ipv4Addr::new(10, 9, 8, 7));
    assert_eq!(&*zone.local_domain, "cli.lan.");
    assert_eq!(zone.ttl, 90);
    assert_eq!(
        config.upstream.resolvers().unwrap(),
        vec!["127.0.0.1:5300".parse().unwrap()]
    );
}
