use std::future::ready;

use outcome_rail::async_ext::Lift;
use outcome_rail::Outcome;

#[tokio::test]
async fn lift_runs_delegate_on_ready_output() {
    let outcome = Lift::new(ready(Outcome::ok(2)), |o: Outcome<i32>| o.map(|x| x + 1)).await;

    assert_eq!(outcome.into_value(), Some(3));
}

#[tokio::test]
async fn lift_waits_for_pending_inner() {
    let inner = async {
        tokio::task::yield_now().await;
        Outcome::ok_with_message(1, "late")
    };

    let outcome = Lift::new(inner, |o: Outcome<i32>| o.with_message("after")).await;
    assert_eq!(outcome.messages(), ["late", "after"]);
}

#[tokio::test]
async fn lift_is_usable_across_tasks() {
    let handle = tokio::spawn(Lift::new(async { Outcome::<u8>::fail("remote") }, |o: Outcome<u8>| o.weight()));

    assert_eq!(handle.await.unwrap(), Some(1));
}
