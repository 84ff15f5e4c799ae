//! Zonehost 集成测试（真实 API）
//!
//! 运行方式:
//! ```bash
//! ZONEHOST_ACCOUNT=xxx ZONEHOST_PASSWORD=xxx TEST_DOMAIN=example.com \
//!     cargo test -p zonehost-provider --test live_test -- --ignored --nocapture --test-threads=1
//! ```
//!
//! `TEST_DOMAIN` must already be hosted on the account. Nothing here adds or
//! modifies domains.

mod common;

use zonehost_provider::{DnsHosting, NameServer, ZonehostProvider};

fn live_provider() -> ZonehostProvider {
    ZonehostProvider::from_env().expect("创建 Provider 失败")
}

fn test_domain() -> String {
    std::env::var("TEST_DOMAIN").expect("缺少 TEST_DOMAIN")
}

#[tokio::test]
#[ignore]
async fn test_live_validate_credentials() {
    skip_if_no_credentials!("ZONEHOST_ACCOUNT", "ZONEHOST_PASSWORD");

    let valid = require_ok!(live_provider().validate_credentials().await);
    assert!(valid, "凭证应该有效");

    println!("✓ validate_credentials 测试通过");
}

#[tokio::test]
#[ignore]
async fn test_live_list_domains() {
    skip_if_no_credentials!("ZONEHOST_ACCOUNT", "ZONEHOST_PASSWORD", "TEST_DOMAIN");

    let domains = require_ok!(live_provider().list_domains().await);
    assert!(
        domains.contains_key(&test_domain()),
        "测试域名不在账号中: {domains:?}"
    );

    println!("✓ list_domains 测试通过，共 {} 个域名", domains.len());
}

#[tokio::test]
#[ignore]
async fn test_live_get_domain() {
    skip_if_no_credentials!("ZONEHOST_ACCOUNT", "ZONEHOST_PASSWORD", "TEST_DOMAIN");

    let record = require_ok!(live_provider().get_domain(&test_domain()).await);
    assert!(record.records.len() <= zonehost_provider::MAX_RECORDS);

    println!(
        "✓ get_domain 测试通过: {} ({} 条记录)",
        record.hostmaster,
        record.records.len()
    );
}

#[tokio::test]
#[ignore]
async fn test_live_get_zone_on_every_name_server() {
    skip_if_no_credentials!("ZONEHOST_ACCOUNT", "ZONEHOST_PASSWORD", "TEST_DOMAIN");

    let provider = live_provider();
    let domain = test_domain();
    for ns in [NameServer::One, NameServer::Two, NameServer::Three] {
        match provider.get_zone(&domain, ns).await {
            Ok(zone) => println!("✓ NS{}: {} bytes", ns.index(), zone.len()),
            Err(e) => println!("✗ NS{}: {e}", ns.index()),
        }
    }
}
