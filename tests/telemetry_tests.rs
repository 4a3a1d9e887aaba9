use radar_rs::telemetry::{init_default_tracing, init_tracing_with_fallback};

#[cfg(feature = "telemetry")]
#[test]
fn subscriber_installs_once_per_process() {
    assert!(init_default_tracing());
    assert!(!init_tracing_with_fallback("radar_rs=trace"));

    tracing::info!(target: "radar_rs", "subscriber ready");
}

#[cfg(not(feature = "telemetry"))]
#[test]
fn init_is_a_no_op_without_the_feature() {
    assert!(!init_default_tracing());
    assert!(!init_tracing_with_fallback("radar_rs=debug"));
}
