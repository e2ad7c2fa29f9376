//! Basic usage examples for asynciter
//!
//! Run with: cargo run --example basic

use async_trait::async_trait;
use std::ops::ControlFlow;
use std::time::Duration;

use asynciter::prelude::*;
use tokio_util::sync::CancellationToken;

/// A source standing in for an open handle that must be released
struct LineReader {
    lines: std::vec::IntoIter<String>,
}

#[async_trait]
impl Source for LineReader {
    type Item = String;

    async fn next(&mut self) -> Result<Option<String>> {
        tokio::task::yield_now().await;
        Ok(self.lines.next())
    }

    async fn finish(&mut self) -> Result<()> {
        println!("LineReader: releasing handle");
        Ok(())
    }
}

/// Example 1: Simple number processing
async fn simple_example() -> Result<()> {
    println!("=== Simple Number Processing ===");

    AsyncIter::from_iterable(1..11)
        .inspect(|x| println!("Number: {}", x))
        .run()
        .await?;

    println!();
    Ok(())
}

/// Example 2: Transform and filter
async fn transform_filter_example() -> Result<()> {
    println!("=== Transform and Filter ===");

    let squares = AsyncIter::from_iterable(1..21)
        .filter(|x| x % 3 == 0)
        .map(|x| x * x)
        .collect()
        .await?;
    println!("Squares: {:?}", squares);

    println!();
    Ok(())
}

/// Example 3: Using stepping functions
async fn functional_example() -> Result<()> {
    println!("=== Stepping Functions ===");

    let mut counter = 0;
    AsyncIter::from_fn(move |stop| {
        counter += 1;
        if counter > 5 {
            stop.stop();
        }
        Ok(format!("Item-{}", counter))
    })
    .inspect(|item| println!("Processed: {}", item.to_uppercase()))
    .run()
    .await?;

    println!();
    Ok(())
}

/// Example 4: Folding
async fn reduce_example() -> Result<()> {
    println!("=== Reduce ===");

    let fib = AsyncIter::from_sequence(0, 1)
        .take(10)
        .reduce(vec![0u64, 1], |mut acc, _| {
            let n = acc.len();
            acc.push(acc[n - 1] + acc[n - 2]);
            acc
        })
        .await?;
    println!("Fibonacci numbers: {:?}", fib);

    println!();
    Ok(())
}

/// Example 5: Cancelling from a timer
async fn cancellation_example() -> Result<()> {
    println!("=== Cancellation ===");

    let token = CancellationToken::new();
    let timer = token.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(350)).await;
        timer.cancel();
    });

    let start = std::time::Instant::now();
    let ticks = AsyncIter::from_async_fn(|_stop| async {
        tokio::time::sleep(Duration::from_millis(100)).await;
        Ok(())
    })
    .with_signal(&token)
    .reduce(0, |acc, ()| acc + 1)
    .await?;

    println!(
        "Counted {} ticks before cancellation in {:.2} seconds",
        ticks,
        start.elapsed().as_secs_f64()
    );

    println!();
    Ok(())
}

/// Example 6: Combining sources
async fn combining_example() -> Result<()> {
    println!("=== Combining Sources ===");

    let joined = AsyncIter::join(iter(1..4), iter(10..13)).collect().await?;
    println!("Joined: {:?}", joined);

    let zipped = AsyncIter::zip(iter(1..4), iter(["a", "b", "c", "d"]))
        .collect()
        .await?;
    println!("Zipped: {:?}", zipped);

    let woven = AsyncIter::interleave(iter(1..4), iter(20..23)).collect().await?;
    println!("Interleaved: {:?}", woven);

    println!();
    Ok(())
}

/// Example 7: Replaying a sample
async fn sample_example() -> Result<()> {
    println!("=== Sampling ===");

    let colors = AsyncIter::from_sample(iter(["red", "green", "blue"]), SampleConfig::default())
        .take(7)
        .collect()
        .await?;
    println!("Cycled: {:?}", colors);

    println!();
    Ok(())
}

/// Example 8: Early exit releases resources
async fn early_exit_example() -> Result<()> {
    println!("=== Early Exit ===");

    let reader = LineReader {
        lines: vec!["header", "row 1", "row 2", "row 3"]
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>()
            .into_iter(),
    };

    AsyncIter::from_source(reader)
        .skip(1)
        .run_with(|line| {
            println!("Read: {}", line);
            if line == "row 2" {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .await?;

    println!();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    println!("asynciter {} Basic Usage Examples\n", asynciter::VERSION);

    simple_example().await?;
    transform_filter_example().await?;
    functional_example().await?;
    reduce_example().await?;
    cancellation_example().await?;
    combining_example().await?;
    sample_example().await?;
    early_exit_example().await?;

    println!("All basic examples completed successfully!");
    Ok(())
}
