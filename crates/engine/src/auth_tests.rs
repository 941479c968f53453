// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn config(keycloak: Option<&str>, platform: Option<&str>) -> RunConfiguration {
    RunConfiguration {
        keycloak_token: keycloak.map(str::to_string),
        platform_token: platform.map(str::to_string),
        ..Default::default()
    }
}

#[yare::parameterized(
    keycloak_wins  = { Some("kc"), Some("oc"), Some(AuthCredential::Keycloak("kc".to_string())) },
    keycloak_only  = { Some("kc"), None,       Some(AuthCredential::Keycloak("kc".to_string())) },
    platform_only  = { None,       Some("oc"), Some(AuthCredential::Platform("oc".to_string())) },
    none           = { None,       None,       None },
)]
fn resolves_credential(
    keycloak: Option<&str>,
    platform: Option<&str>,
    expected: Option<AuthCredential>,
) {
    assert_eq!(resolve_auth(&config(keycloak, platform)), expected);
}
