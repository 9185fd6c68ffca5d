//! The same chain through immediate and asynchronous shapes must agree on
//! descriptor, value and log.

use outcome_rail::prelude_async::*;

fn receivers() -> Vec<Outcome<i32>> {
    vec![
        Outcome::ok_with_message(4, "start"),
        Outcome::ok_ignore_warnings(4).with_message("lenient"),
        Outcome::not_found(4),
        Outcome::invalid("seed", "bad"),
    ]
}

fn step(x: i32) -> Outcome<i32> {
    if x > 3 {
        Outcome::ok_with_message(x - 1, "decremented")
    } else {
        Outcome::invalid("x", "too small")
    }
}

fn audit(x: &i32) -> Outcome<()> {
    match x {
        4 => Outcome::<()>::warn("four").with_message("audited"),
        _ => Outcome::success_with_message("audited"),
    }
}

async fn produce<T>(outcome: Outcome<T>) -> Outcome<T> {
    tokio::task::yield_now().await;
    outcome
}

#[tokio::test]
async fn bind_shapes_agree() {
    for receiver in receivers() {
        let immediate = receiver.clone().bind(step);
        let continuation = receiver.clone().bind_async(|x| produce(step(x))).await;
        let future = produce(receiver.clone()).bind(step).await;
        let both = produce(receiver).bind_async(|x| produce(step(x))).await;

        assert_eq!(continuation, immediate);
        assert_eq!(future, immediate);
        assert_eq!(both, immediate);
    }
}

#[tokio::test]
async fn map_shapes_agree() {
    for receiver in receivers() {
        let immediate = receiver.clone().map(|x| x * 3);
        let continuation = receiver.clone().map_async(|x| async move { x * 3 }).await;
        let future = produce(receiver).map(|x| x * 3).await;

        assert_eq!(continuation, immediate);
        assert_eq!(future, immediate);
    }
}

#[tokio::test]
async fn check_shapes_agree() {
    for receiver in receivers() {
        let immediate = receiver.clone().check(audit);
        let continuation = receiver.clone().check_async(|x| produce(audit(x))).await;
        let future = produce(receiver.clone()).check(audit).await;
        let both = produce(receiver).check_async(|x| produce(audit(x))).await;

        assert_eq!(continuation, immediate);
        assert_eq!(future, immediate);
        assert_eq!(both, immediate);
    }
}

#[tokio::test]
async fn check_if_shapes_agree() {
    for receiver in receivers() {
        let immediate = receiver.clone().check_if(|x| *x > 2, audit);
        let continuation = receiver.clone().check_if_async(|x| *x > 2, |x| produce(audit(x))).await;
        let future = produce(receiver).check_if(|x| *x > 2, audit).await;

        assert_eq!(continuation, immediate);
        assert_eq!(future, immediate);
    }
}

#[tokio::test]
async fn check_each_shapes_agree() {
    let limits = [10, 5, 3, 1];
    let within = |limit: i32, x: &i32| Outcome::ok_when(*x < limit, "over limit").with_message(format!("{limit}"));

    for receiver in receivers() {
        let immediate = receiver.clone().check_each(limits, within);
        let continuation = receiver.clone().check_each_async(limits, |l, x| produce(within(l, x))).await;
        let future = produce(receiver).check_each(limits, within).await;

        assert_eq!(continuation, immediate);
        assert_eq!(future, immediate);
    }
}

#[tokio::test]
async fn combine_with_shapes_agree() {
    for receiver in receivers() {
        let immediate = receiver.clone().combine_with(|x| step(*x));
        let continuation = receiver.clone().combine_with_async(|x| produce(step(*x))).await;
        let future = produce(receiver.clone()).combine_with(|x| step(*x)).await;
        let paired = produce(receiver.clone()).combine(step(4)).await;

        assert_eq!(continuation, immediate);
        assert_eq!(future, immediate);
        assert_eq!(paired, receiver.combine(step(4)));
    }
}

#[tokio::test]
async fn tap_and_compensate_shapes_agree() {
    for receiver in receivers() {
        let immediate = receiver.clone().tap(|_| {}).compensate(|| step(9));
        let continuation = receiver.clone().tap_async(|_| async {}).await.compensate_async(|| produce(step(9))).await;
        let future = produce(receiver).tap(|_| {}).compensate(|| step(9)).await;

        assert_eq!(continuation, immediate);
        assert_eq!(future, immediate);
    }
}

#[tokio::test]
async fn match_with_shapes_agree() {
    for receiver in receivers() {
        let immediate = receiver.clone().match_with(|x| x.to_string(), |f| f.kind().to_string());
        let continuation = receiver
            .clone()
            .match_with_async(|x| async move { x.to_string() }, |f| async move { f.kind().to_string() })
            .await;
        let future = produce(receiver).match_with(|x| x.to_string(), |f| f.kind().to_string()).await;

        assert_eq!(continuation, immediate);
        assert_eq!(future, immediate);
    }
}

#[tokio::test]
async fn combine_value_and_flatten_shapes_agree() {
    for receiver in receivers() {
        let immediate = receiver.clone().combine_value("tag");
        let future = produce(receiver.clone()).combine_value("tag").await;
        assert_eq!(future, immediate);

        let immediate = receiver.clone().flatten();
        let future = produce(receiver).flatten().await;
        assert_eq!(future, immediate);
    }
}

#[tokio::test]
async fn evaluated_outcome_shapes_agree() {
    for receiver in receivers() {
        let immediate = receiver.clone().check_outcome(audit(&4)).and(step(5));
        let future = produce(receiver).check_outcome(audit(&4)).await.and(step(5));

        assert_eq!(future, immediate);
    }
}

#[tokio::test]
async fn match_with_messages_shapes_agree() {
    for receiver in receivers() {
        let render = |x: i32, log: &[String]| format!("{x}:{}", log.len());
        let render_failure = |f: Failure, log: &[String]| format!("{}:{}", f.kind(), log.len());

        let immediate = receiver.clone().match_with_messages(render, render_failure);
        let future = produce(receiver).match_with_messages(render, render_failure).await;

        assert_eq!(future, immediate);
    }
}
