// crates/plot-core/tests/session_scenarios.rs
//
// Full submission cycles exercised at the logical level: form input →
// request build → outcome interpretation, without any network in the loop.

use plot_core::{
    apply_outcome, begin_loading, FormState, Phase, PlotType, ResponseOutcome,
    DEFAULT_BACKEND_ERROR, TRANSPORT_ERROR_MESSAGE,
};
use plot_protocol::{build_request, decode_error_body, ValidationError};

fn submit_ready_form() -> FormState {
    let mut form = FormState::new();
    form.set_ticker("aapl");
    form.set_start_date("2024-01-02");
    form.set_end_date("2024-03-28");
    form
}

#[test]
fn happy_path_cycle() {
    let mut form = submit_ready_form();
    form.set_plot_type(PlotType::Ohlc);
    form.set_show_volume(true);

    let payload = build_request(&form).expect("form is complete");
    assert_eq!(payload.ticker, "AAPL");
    assert_eq!(payload.plot_type, "ohlc");

    begin_loading(&mut form);
    assert_eq!(form.phase, Phase::Loading);

    apply_outcome(&mut form, ResponseOutcome::Success("AAAA".to_string()));
    assert_eq!(form.phase, Phase::Success);
    assert_eq!(
        form.plot_image_data.as_deref(),
        Some("data:image/png;base64,AAAA")
    );
    assert!(form.error_message.is_none());
}

#[test]
fn invalid_form_never_reaches_loading() {
    let mut form = submit_ready_form();
    form.set_end_date("");

    let err = build_request(&form).unwrap_err();
    assert_eq!(err, ValidationError::MissingEndDate);

    // The submission aborts here: no Loading transition, no outcome.
    assert_eq!(form.phase, Phase::Idle);
    assert!(form.plot_image_data.is_none());
}

#[test]
fn backend_rejection_after_a_success_keeps_the_plot() {
    let mut form = submit_ready_form();

    begin_loading(&mut form);
    apply_outcome(&mut form, ResponseOutcome::Success("AAAA".to_string()));

    form.set_ticker("zzzz");
    begin_loading(&mut form);
    let message = decode_error_body(r#"{"error":"No data found for ticker ZZZZ"}"#);
    apply_outcome(&mut form, ResponseOutcome::Failure(message));

    assert_eq!(form.phase, Phase::Error);
    assert_eq!(
        form.error_message.as_deref(),
        Some("No data found for ticker ZZZZ")
    );
    assert_eq!(
        form.plot_image_data.as_deref(),
        Some("data:image/png;base64,AAAA")
    );
}

#[test]
fn failure_kinds_render_with_distinct_default_messages() {
    let mut backend_failed = submit_ready_form();
    begin_loading(&mut backend_failed);
    apply_outcome(
        &mut backend_failed,
        ResponseOutcome::Failure(decode_error_body("{}")),
    );
    assert_eq!(
        backend_failed.error_message.as_deref(),
        Some(DEFAULT_BACKEND_ERROR)
    );

    let mut unreachable = submit_ready_form();
    begin_loading(&mut unreachable);
    apply_outcome(&mut unreachable, ResponseOutcome::TransportError);
    assert_eq!(
        unreachable.error_message.as_deref(),
        Some(TRANSPORT_ERROR_MESSAGE)
    );

    assert_ne!(backend_failed.error_message, unreachable.error_message);
}

#[test]
fn resubmission_after_error_recovers() {
    let mut form = submit_ready_form();

    begin_loading(&mut form);
    apply_outcome(&mut form, ResponseOutcome::TransportError);
    assert_eq!(form.phase, Phase::Error);

    // No error is fatal: the same form can go straight back out.
    assert!(build_request(&form).is_ok());
    begin_loading(&mut form);
    assert_eq!(form.phase, Phase::Loading);
    assert!(form.error_message.is_none());

    apply_outcome(&mut form, ResponseOutcome::Success("BBBB".to_string()));
    assert_eq!(form.phase, Phase::Success);
}
