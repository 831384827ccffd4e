use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Mutex;
use timezone_service::config::Config;
use tokio_test::{assert_err, assert_ok};

// Mutex to ensure config tests run sequentially to avoid environment variable conflicts
static CONFIG_TEST_MUTEX: Mutex<()> = Mutex::new(());

fn clear_env() {
    env::remove_var("HTTP_PORT");
    env::remove_var("BIND_ADDRESS");
}

#[test]
fn test_config_from_env_with_all_vars() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("HTTP_PORT", "8080");
    env::set_var("BIND_ADDRESS", "127.0.0.1");

    let config = assert_ok!(Config::from_env());

    assert_eq!(config.http_port, 8080);
    assert_eq!(config.bind_address, IpAddr::V4(Ipv4Addr::LOCALHOST));
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");

    clear_env();
}

#[test]
fn test_config_from_env_with_defaults() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();
    clear_env();

    let config = assert_ok!(Config::from_env());

    assert_eq!(config.http_port, 8083);
    assert_eq!(config.bind_address, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8083");
}

#[test]
fn test_config_invalid_port() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("HTTP_PORT", "invalid_port");

    let error_msg = assert_err!(Config::from_env()).to_string();
    assert!(error_msg.contains("Invalid HTTP_PORT"));

    clear_env();
}

#[test]
fn test_config_port_edge_cases() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("HTTP_PORT", "0");
    assert_eq!(Config::from_env().unwrap().http_port, 0);

    env::set_var("HTTP_PORT", "65535");
    assert_eq!(Config::from_env().unwrap().http_port, 65535);

    env::set_var("HTTP_PORT", "65536");
    assert_err!(Config::from_env());

    env::set_var("HTTP_PORT", "-1");
    assert_err!(Config::from_env());

    clear_env();
}

#[test]
fn test_config_invalid_bind_address() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("BIND_ADDRESS", "not-an-ip");

    let error_msg = assert_err!(Config::from_env()).to_string();
    assert!(error_msg.contains("Invalid BIND_ADDRESS"));

    clear_env();
}

#[test]
fn test_config_empty_and_whitespace_values() {
    let _guard = CONFIG_TEST_MUTEX.lock().unwrap();

    env::set_var("BIND_ADDRESS", "");
    env::set_var("HTTP_PORT", "  9000  ");

    let config = assert_ok!(Config::from_env());
    assert_eq!(config.bind_address, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(config.http_port, 9000);

    env::set_var("BIND_ADDRESS", " ::1 ");
    let config = assert_ok!(Config::from_env());
    assert!(config.bind_address.is_ipv6());

    clear_env();
}
