//! Dispatch table walkthrough and a timing comparison against an `if` chain
//! and a `match`.
//!
//! ```text
//! cargo run --example benchmark
//! RUST_LOG=warn cargo run --example benchmark   # show overwrite warnings
//! ```

use std::{
    hint::black_box,
    time::{Duration, Instant},
};
use switchboard::{Case, DispatchTable, SwitchError, named, no_op, raise_on_missing};
use tracing_subscriber::EnvFilter;

const RUNNER_COUNT: u64 = 10_000;
const LOOP_COUNT: u32 = 10_000;

/// Positional and named arguments, the way a caller might bundle them.
#[derive(Debug, Clone, Default)]
struct CallArgs {
    positional: Vec<String>,
    named: Vec<(&'static str, String)>,
}

impl CallArgs {
    fn positional(values: &[&str]) -> Self {
        Self {
            positional: values.iter().map(|v| v.to_string()).collect(),
            named: Vec::new(),
        }
    }

    fn with(mut self, name: &'static str, value: &str) -> Self {
        self.named.push((name, value.to_string()));
        self
    }
}

fn foo(args: CallArgs) {
    println!("Welcome to foo!");
    println!("{:?}", args.positional);
    println!("{:?}", args.named);
}

fn runner(_: ()) -> u64 {
    let mut sum = 0;
    for i in 0..RUNNER_COUNT {
        sum += black_box(i);
    }
    sum
}

fn ifs(choice: u32, call: fn(()) -> u64) -> u64 {
    if choice == 0 {
        call(())
    } else if choice == 1 {
        call(())
    } else if choice == 2 {
        call(())
    } else if choice == 3 {
        call(())
    } else if choice == 4 {
        call(())
    } else if choice == 5 {
        call(())
    } else if choice == 6 {
        call(())
    } else if choice == 7 {
        call(())
    } else if choice == 8 {
        call(())
    } else if choice == 9 {
        call(())
    } else {
        call(())
    }
}

fn cases(choice: u32, call: fn(()) -> u64) -> u64 {
    match choice {
        0 => call(()),
        1 => call(()),
        2 => call(()),
        3 => call(()),
        4 => call(()),
        5 => call(()),
        6 => call(()),
        7 => call(()),
        8 => call(()),
        9 => call(()),
        _ => call(()),
    }
}

fn time_me(mut dispatch: impl FnMut(u32) -> u64) -> Duration {
    let begin = Instant::now();
    for i in 0..LOOP_COUNT {
        black_box(dispatch(black_box(i % 11)));
    }
    begin.elapsed()
}

fn walkthrough() {
    let mut s1: DispatchTable<&str, CallArgs, ()> = DispatchTable::builder()
        .label("Switch")
        .default_handler(named("default_function", no_op::<CallArgs, ()>))
        .missing_handler(named("none", no_op::<CallArgs, ()>))
        .build();
    println!("1 {s1}");
    s1.update("foo1", named("foo", foo));
    println!("2 {s1}");
    s1.register("foo2", named("foo", foo));
    println!("3 {s1}");
    s1.lookup("foo1")
        .call(CallArgs::positional(&["10", "20"]).with("hi", "in").with("foo", "foo"));
    println!("4 The length of the set is {}", s1.len());
    s1.invoke("foo2", CallArgs::positional(&["50"]).with("some", "some"));
    s1.delete("foo2");
    println!("5 The length of the set is {}", s1.len());
    s1.delete("foo3");
    println!("6 The length of the set is {}", s1.len());
    s1.invoke("nothing", CallArgs::default());
    s1.invoke("default", CallArgs::default());

    let mut s2: DispatchTable<&str, String, Result<(), SwitchError>> = DispatchTable::with_handlers(
        |_: String| -> Result<(), SwitchError> { Ok(()) },
        raise_on_missing::<String, (), SwitchError>,
    );
    s2.register("x", |line: String| -> Result<(), SwitchError> {
        println!("{line}");
        Ok(())
    });
    let _ = s2.invoke("x", "Hello, there!".to_string());
    println!("default is in {}", s2.contains("default"));
    println!("nothing is in {}", s2.contains("nothing"));
    println!("{:?}", s2);
    if let Err(e) = s2.invoke("z", "nothing".to_string()) {
        eprintln!("{e}");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    walkthrough();

    let mut switch: DispatchTable<Case<u32>, (), u64> =
        DispatchTable::with_handlers(runner, runner);
    switch.merge((0..10).map(|n| (Case::Key(n), runner)));

    println!("RUNNING COUNT: {RUNNER_COUNT} LOOP COUNT: {LOOP_COUNT}");
    println!("If statement     took {:?}", time_me(|choice| ifs(choice, runner)));
    println!("match statement  took {:?}", time_me(|choice| cases(choice, runner)));
    println!(
        "Dispatch table   took {:?}",
        time_me(|choice| switch.invoke(&Case::Key(choice), ()))
    );
}
