mod common;

use std::time::Duration;

use common::FakeService;
use gridworld_viz::{
    dispatch::{Completion, Dispatcher},
    session::Session,
};
use tokio::runtime::Runtime;

const TIMEOUT: Duration = Duration::from_secs(2);

#[test]
fn completions_arrive_in_response_order() {
    let runtime = Runtime::new().unwrap();
    let service = FakeService {
        train_delay: Duration::from_millis(200),
        ..Default::default()
    };
    let (dispatcher, rx) = Dispatcher::new(service, runtime.handle().clone());

    let mut session = Session::new();
    dispatcher.initialize(5);
    let Completion::Initialize(result) = rx.recv_timeout(TIMEOUT).unwrap() else {
        panic!("expected initialize completion");
    };
    assert!(session.apply_initialize(result));

    let ticket = session.begin_train().unwrap();
    dispatcher.train(ticket, 10);
    dispatcher.initialize(5);

    // the slow training response lands after the re-initialization
    let first = rx.recv_timeout(TIMEOUT).unwrap();
    assert!(matches!(first, Completion::Initialize(_)));
    let second = rx.recv_timeout(TIMEOUT).unwrap();
    assert!(matches!(second, Completion::Train(..)));

    let Completion::Initialize(result) = first else {
        unreachable!()
    };
    assert!(session.apply_initialize(result));
    let Completion::Train(ticket, result) = second else {
        unreachable!()
    };
    assert!(!session.apply_train(ticket, result));

    assert!(session.chart().is_empty());
    assert!(session.overlay().is_none());
    assert!(!session.controls().train_busy);
    assert!(session.controls().can_train());
    assert!(!session.controls().evaluate_enabled);
}

#[test]
fn every_call_sends_one_completion() {
    let runtime = Runtime::new().unwrap();
    let service = FakeService::default();
    let calls = service.clone();
    let (dispatcher, rx) = Dispatcher::new(service, runtime.handle().clone());

    dispatcher.stats();
    let Completion::Stats(Ok(stats)) = rx.recv_timeout(TIMEOUT).unwrap() else {
        panic!("expected stats completion");
    };
    assert_eq!(stats.total_episodes, 2);

    dispatcher.initialize(7);
    let Completion::Initialize(Ok(env)) = rx.recv_timeout(TIMEOUT).unwrap() else {
        panic!("expected initialize completion");
    };
    assert_eq!(env.size(), 7);

    assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
    assert_eq!(calls.calls(), vec!["stats", "initialize 7"]);
}
