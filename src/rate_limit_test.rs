use std::net::Ipv4Addr;

use super::*;

fn ip(last: u8) -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(203, 0, 113, last))
}

fn limiter(per_client: usize, global: usize) -> RateLimiter {
    RateLimiter::with_config(RateLimitConfig {
        per_client_limit: per_client,
        per_client_window: Duration::from_secs(600),
        global_limit: global,
        global_window: Duration::from_secs(3600),
    })
}

#[test]
fn per_client_allows_up_to_limit() {
    let rl = limiter(3, 100);
    let client = ip(1);
    let now = Instant::now();

    for i in 0..3 {
        assert!(rl.check_and_record_at(client, now).is_ok(), "message {i} should pass");
    }
    assert_eq!(
        rl.check_and_record_at(client, now),
        Err(RateLimitError::PerClientExceeded { limit: 3, window_secs: 600 })
    );
}

#[test]
fn per_client_limit_is_independent_between_clients() {
    let rl = limiter(1, 100);
    let now = Instant::now();

    assert!(rl.check_and_record_at(ip(1), now).is_ok());
    assert!(rl.check_and_record_at(ip(1), now).is_err());
    assert!(rl.check_and_record_at(ip(2), now).is_ok());
}

#[test]
fn global_allows_up_to_limit() {
    let rl = limiter(10, 4);
    let now = Instant::now();

    for i in 0..4 {
        assert!(rl.check_and_record_at(ip(i), now).is_ok(), "message {i} should pass");
    }
    assert_eq!(
        rl.check_and_record_at(ip(99), now),
        Err(RateLimitError::GlobalExceeded { limit: 4, window_secs: 3600 })
    );
}

#[test]
fn rejected_attempts_are_not_recorded() {
    let rl = limiter(1, 2);
    let now = Instant::now();

    assert!(rl.check_and_record_at(ip(1), now).is_ok());
    for _ in 0..5 {
        assert!(rl.check_and_record_at(ip(1), now).is_err());
    }
    // The global window still has room for one more client.
    assert!(rl.check_and_record_at(ip(2), now).is_ok());
}

#[test]
fn window_expiry_allows_new_messages() {
    let rl = limiter(2, 100);
    let client = ip(7);
    let start = Instant::now();

    rl.check_and_record_at(client, start).unwrap();
    rl.check_and_record_at(client, start).unwrap();
    assert!(rl.check_and_record_at(client, start).is_err());

    let later = start + Duration::from_secs(601);
    assert!(rl.check_and_record_at(client, later).is_ok());
}

#[test]
fn idle_clients_are_swept() {
    let rl = limiter(1, 10_000);
    let start = Instant::now();
    rl.check_and_record_at(ip(1), start).unwrap();

    let later = start + Duration::from_secs(601);
    for i in 0..SWEEP_EVERY {
        let addr = IpAddr::V4(Ipv4Addr::new(10, 0, (i / 256) as u8, (i % 256) as u8));
        rl.check_and_record_at(addr, later).unwrap();
    }

    // The stale entry for ip(1) is gone; only the fresh clients remain.
    assert_eq!(rl.tracked_clients(), SWEEP_EVERY);
}

#[test]
fn default_config_matches_documented_limits() {
    let cfg = RateLimitConfig::default();
    assert_eq!(cfg.per_client_limit, 5);
    assert_eq!(cfg.per_client_window, Duration::from_secs(600));
    assert_eq!(cfg.global_limit, 100);
    assert_eq!(cfg.global_window, Duration::from_secs(3600));
}
