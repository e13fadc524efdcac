use dhcp4kit::{
    v4::{in_range, OptionCode},
    Profile,
};
use std::{io::Write as _, net::Ipv4Addr};

const PROFILE: &str = r#"{
    "server_identifier": "10.1.0.1",
    "subnet_mask": "255.255.0.0",
    "pool_start": "10.1.0.100",
    "pool_end": "10.1.0.199",
    "routers": ["10.1.0.1", "10.1.0.2"],
    "dns_servers": ["10.1.0.53"],
    "domain_name": "lab.example",
    "lease_time_secs": 7200
}"#;

async fn load_profile() -> Profile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(PROFILE.as_bytes()).unwrap();
    Profile::load(file.path()).await.unwrap()
}

#[tokio::test]
async fn test_reply_options_follow_request_order() {
    let profile = load_profile().await;
    let options = profile.option_set();

    let request: Vec<OptionCode> = [1u8, 3, 6, 15, 51, 119]
        .into_iter()
        .map(OptionCode::from)
        .collect();
    let reply = options.select_order_or_all(Some(&request[..]));

    let codes: Vec<u8> = reply.iter().map(|opt| u8::from(opt.code)).collect();
    assert_eq!(codes, vec![1, 3, 6, 15, 51]);
    assert_eq!(&reply[0].value[..], &[255, 255, 0, 0]);
    assert_eq!(&reply[1].value[..], &[10, 1, 0, 1, 10, 1, 0, 2]);
    assert_eq!(&reply[2].value[..], &[10, 1, 0, 53]);
    assert_eq!(&reply[3].value[..], b"lab.example");
    assert_eq!(&reply[4].value[..], &[0x00, 0x00, 0x1c, 0x20]);
}

#[tokio::test]
async fn test_reply_options_without_request() {
    let profile = load_profile().await;
    let reply = profile.option_set().select_order_or_all(None);

    let codes: Vec<u8> = reply.iter().map(|opt| u8::from(opt.code)).collect();
    assert_eq!(codes, vec![1, 3, 6, 15, 28, 51, 54, 58, 59]);
}

#[tokio::test]
async fn test_pool_bookkeeping() {
    let profile = load_profile().await;
    let pool = profile.pool().unwrap();

    assert_eq!(pool.size(), 100);
    assert_eq!(pool.nth(99), Some(Ipv4Addr::new(10, 1, 0, 199)));
    assert!(!pool.contains(profile.server_identifier));
    assert!(pool
        .iter()
        .all(|addr| in_range(pool.start(), pool.stop(), addr)));
}

#[test]
fn test_default_profile_round_trips_through_json() {
    let profile = Profile::default();
    let json = serde_json::to_string(&profile).unwrap();
    let parsed: Profile = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, profile);
}
