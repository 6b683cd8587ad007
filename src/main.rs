use anyhow::{anyhow, Context};
use log::info;
use outcome::prelude::*;

/// Producer that cares about its value only.
fn check_success_only(check: bool) -> SuccessView<i32> {
    if check {
        outcome::success_only(12)
    } else {
        outcome::fail_unit()
    }
}

/// Producer that cares about its error only. Success branch builds a full
/// outcome and narrows it.
fn check_fail_only(check: bool) -> FailureView<anyhow::Error> {
    if check {
        outcome::success::<i32, _>(12).into_failure_view()
    } else {
        outcome::fail_only(anyhow!("asd"))
    }
}

fn check_outcome(check: bool) -> Outcome<i32, anyhow::Error> {
    if check {
        outcome::success(12)
    } else {
        outcome::fail(anyhow!("asd"))
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let check = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<bool>()
            .with_context(|| format!("expected `true` or `false`, got {:?}", arg))?,
        None => false,
    };
    info!("running producers with check = {}", check);

    let only = check_success_only(check);
    only.if_fail_unit(|| println!("success-only producer failed"));
    only.if_success(|value| println!("{}", value));
    info!("success-only payload: {:?}", only.success_or_none());

    let errors = check_fail_only(check);
    errors.if_success_unit(|| println!("fail-only producer succeeded"));
    errors.if_fail(|e| println!("{}", e));

    check_outcome(check)
        .logged("check_outcome")
        .on_success(|value| println!("{}", value))
        .on_fail(|e| println!("{}", e));

    Ok(())
}
