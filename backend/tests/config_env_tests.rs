mod support;

use std::path::PathBuf;

use spacex_dash::config::{DashboardConfig, DATA_PATH_ENV, HOST_ENV, PORT_ENV};
use support::with_scoped_env;

#[test]
fn test_env_overrides_replace_file_values() {
    let config = DashboardConfig::from_toml_str(
        r#"
        [data]
        path = "data/launches.csv"

        [server]
        host = "127.0.0.1"
        port = 9000
        "#,
    )
    .unwrap();

    let config = with_scoped_env(
        &[
            (DATA_PATH_ENV, Some("/srv/spacex_launch_dash.csv")),
            (HOST_ENV, Some("localhost")),
            (PORT_ENV, Some("8123")),
        ],
        || config.with_env_overrides(),
    )
    .unwrap();

    assert_eq!(config.data.path, PathBuf::from("/srv/spacex_launch_dash.csv"));
    assert_eq!(config.bind_address(), "localhost:8123");
}

#[test]
fn test_unset_env_keeps_file_values() {
    let config = with_scoped_env(
        &[(DATA_PATH_ENV, None), (HOST_ENV, None), (PORT_ENV, None)],
        || DashboardConfig::default().with_env_overrides(),
    )
    .unwrap();

    assert_eq!(config, DashboardConfig::default());
    assert_eq!(config.bind_address(), "0.0.0.0:8050");
}

#[test]
fn test_invalid_port_is_rejected() {
    let result = with_scoped_env(&[(PORT_ENV, Some("not-a-port"))], || {
        DashboardConfig::default().with_env_overrides()
    });

    let err = result.unwrap_err();
    assert!(err.to_string().contains(PORT_ENV));
}
