use super::*;

#[test]
fn render_codes() {
    assert_eq!(RenderStatus::Presented.code(), 1);
    assert_eq!(RenderStatus::NotReady.code(), 0);
    assert_eq!(RenderStatus::Closed.code(), -1);
}

#[test]
fn reconfig_codes() {
    assert_eq!(ReconfigResult::Unchanged.code(), 0);
    assert_eq!(ReconfigResult::Applied.code(), 1);
    assert_eq!(ReconfigResult::Resized.code(), 1);
    assert_eq!(ReconfigResult::StreamDiscarded.code(), 0);
}

#[test]
fn only_discarded_stream_is_an_error() {
    assert_eq!(
        ReconfigResult::Resized.into_result().unwrap(),
        ReconfigResult::Resized
    );
    assert_eq!(
        ReconfigResult::Unchanged.into_result().unwrap(),
        ReconfigResult::Unchanged
    );
    assert!(matches!(
        ReconfigResult::StreamDiscarded.into_result(),
        Err(ChromacastError::ResizeRejected)
    ));
}
