//! 3장 데모: 불변 리스트 (Immutable Lists)
//!
//! 실행 방법: cargo run --bin list_demo -- --length 100000 --readers 4
//! 로그 수준은 RUST_LOG 로 조절한다 (예: RUST_LOG=debug).

use clap::Parser;
use fp_common::{ImmutableList, ListError, list};
use fp_chapter3::section_3_2::{product, sum};
use fp_chapter3::section_3_3::{drop, drop_while, init, set_head, tail, try_drop, try_tail};
use fp_chapter3::section_3_4::{append, fold_left, fold_right, length, length_left, map, sum_left};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "list_demo")]
#[command(about = "Walks through the chapter 3 list exercises")]
struct Args {
    /// Length of the list used for the stack-safety demo.
    #[arg(short, long, default_value_t = 100_000, env = "LIST_DEMO_LENGTH")]
    length: i64,

    /// Number of threads reading one shared list.
    #[arg(short, long, default_value_t = 4, env = "LIST_DEMO_READERS")]
    readers: usize,
}

fn main() -> Result<(), ListError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    tracing::info!(length = args.length, readers = args.readers, "starting list demo");

    println!("=== 3.2: 단일 연결 리스트 (Singly Linked Lists) ===");
    let ints = list![1, 2, 3];
    println!("  sum({ints}) = {}", sum(&ints));
    println!("  product([2, 0, NaN]) = {}", product(&list![2.0, 0.0, f64::NAN]));

    println!("\n=== 3.3: 데이터 공유 (Data Sharing) ===");
    let empty: ImmutableList<i64> = list![];
    println!("  tail({ints}) = {}", tail(&ints));
    println!("  tail({empty}) = {}", tail(&empty));
    println!("  set_head({ints}, 9) = {}", set_head(&ints, 9));
    println!("  drop({ints}, 5) = {}", drop(&ints, 5));
    let digits = list![1, 2, 3, 0, 4];
    println!("  drop_while({digits}, x < 3) = {}", drop_while(&digits, |&x| x < 3));
    println!("  init({ints}) = {}", init(&ints));

    // 검사 버전은 빈 리스트를 오류로 알린다
    let rest = try_tail(&ints)?;
    println!("  try_tail({ints}) = {rest}");
    if let Err(err) = try_drop(&ints, 5) {
        tracing::warn!(%err, "checked drop refused");
    }

    println!("\n=== 3.4: 접기와 고차 함수 (Folds and Higher-Order Functions) ===");
    println!("  fold_left({ints}, 0, -) = {}", fold_left(&ints, 0, |acc, x| acc - x));
    println!("  fold_right({ints}, 0, -) = {}", fold_right(&ints, 0, |x, acc| x - acc));
    println!("  length({ints}) = {}", length(&ints));
    println!("  append({ints}, [4, 5]) = {}", append(&ints, &list![4, 5]));
    println!("  map({ints}, x * 2) = {}", map(&ints, |x| x * 2));

    // 긴 리스트: fold_left 는 반복문이라 스택이 넘치지 않는다
    let long: ImmutableList<i64> = (0..args.length).collect();
    println!("\n  length_left(0..{}) = {}", args.length, length_left(&long));

    // 불변 리스트는 잠금 없이 여러 스레드에서 읽을 수 있다
    let shared = &long;
    let totals: Vec<i64> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..args.readers)
            .map(|reader| {
                scope.spawn(move || {
                    let total = sum_left(shared);
                    tracing::debug!(reader, total, "reader finished");
                    total
                })
            })
            .collect();
        handles
            .into_iter()
            .enumerate()
            .filter_map(|(reader, handle)| match handle.join() {
                Ok(total) => Some(total),
                Err(_) => {
                    tracing::error!(reader, "reader thread panicked");
                    None
                }
            })
            .collect()
    });
    tracing::info!(readers = totals.len(), "all readers finished");
    if let Some(total) = totals.first() {
        println!("  {} readers each computed sum = {total}", totals.len());
    }

    Ok(())
}
