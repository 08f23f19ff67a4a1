//! 3.2절: 단일 연결 리스트 (Section 3.2: Singly Linked Lists)
//!
//! 이 절에서는 다음을 보여줍니다:
//! - 두 개의 변형(`Empty`, `Node`)으로 이루어진 리스트 ADT
//! - 패턴 매칭을 이용한 재귀 함수 (`sum`, `product`)
//! - 0을 만나면 즉시 멈추는 `product` (Short-circuiting product)

use fp_common::ImmutableList;

/// 정수 리스트의 합 (Sum of a list of integers).
///
/// 정의를 그대로 따르는 재귀: `sum(Node(x, xs)) = x + sum(xs)`
///
/// # Panics
///
/// 합이 `i64` 범위를 넘으면 일반 `i64` 덧셈과 똑같이 동작한다: 디버그 빌드에서는
/// 패닉하고, 릴리스 빌드에서는 감싸진다(wrap) (Overflow behaves like plain `i64`
/// addition: a panic in debug builds, wrapping in release builds).
///
/// # Example
/// ```
/// use fp_common::list;
/// use fp_chapter3::section_3_2::sum;
///
/// assert_eq!(sum(&list![1, 2, 3]), 6);
/// assert_eq!(sum(&list![]), 0);
/// ```
pub fn sum(ints: &ImmutableList<i64>) -> i64 {
    match ints {
        ImmutableList::Empty => 0,
        ImmutableList::Node(node) => node.value + sum(&node.rest),
    }
}

/// 실수 리스트의 곱 (Product of a list of doubles).
///
/// 빈 리스트는 1.0. 원소가 0.0이면 나머지를 평가하지 않고 0.0을 돌려준다
/// (Returns 0.0 on the first zero without looking at the rest).
///
/// # Example
/// ```
/// use fp_common::list;
/// use fp_chapter3::section_3_2::product;
///
/// assert_eq!(product(&list![2.0, 3.0]), 6.0);
/// // 0.0 * NaN 은 NaN 이지만, NaN 까지 가지 않는다
/// assert_eq!(product(&list![2.0, 0.0, f64::NAN]), 0.0);
/// ```
pub fn product(ds: &ImmutableList<f64>) -> f64 {
    product_of(ds, |&d| d)
}

/// 각 원소를 `factor`로 계산한 값들의 곱 (Product over a projection).
///
/// `factor`는 왼쪽부터 호출되며, 0.0이 나온 뒤로는 호출되지 않는다
/// (`factor` runs left to right and never after a zero).
pub fn product_of<T, F>(list: &ImmutableList<T>, factor: F) -> f64
where
    F: Fn(&T) -> f64,
{
    fn go<T, F>(list: &ImmutableList<T>, factor: &F) -> f64
    where
        F: Fn(&T) -> f64,
    {
        match list {
            ImmutableList::Empty => 1.0,
            ImmutableList::Node(node) => {
                let x = factor(&node.value);
                if x == 0.0 { 0.0 } else { x * go(&node.rest, factor) }
            }
        }
    }
    go(list, &factor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fp_common::list;
    use std::cell::Cell;

    #[test]
    fn test_sum() {
        assert_eq!(sum(&list![]), 0);
        assert_eq!(sum(&list![1, 2, 3]), 6);
        assert_eq!(sum(&list![-4, 4, 10]), 10);
    }

    #[test]
    fn test_product() {
        assert_eq!(product(&list![]), 1.0);
        assert_eq!(product(&list![2.0, 3.0]), 6.0);
        assert_eq!(product(&list![1.5, 2.0, 4.0]), 12.0);
    }

    #[test]
    fn test_product_short_circuits() {
        // 0.0 * NaN 과 0.0 * inf 는 모두 NaN
        assert_eq!(product(&list![2.0, 0.0, f64::NAN]), 0.0);
        assert_eq!(product(&list![0.0, f64::INFINITY]), 0.0);

        let evaluated = Cell::new(0);
        let result = product_of(&list![2.0, 0.0, 5.0, 7.0], |&d| {
            evaluated.set(evaluated.get() + 1);
            d
        });
        assert_eq!(result, 0.0);
        assert_eq!(evaluated.get(), 2);
    }

    #[test]
    fn test_product_of_without_zero_visits_everything() {
        let evaluated = Cell::new(0);
        let words = list!["ab", "cde", "f"];
        let result = product_of(&words, |w| {
            evaluated.set(evaluated.get() + 1);
            w.len() as f64
        });
        assert_eq!(result, 6.0);
        assert_eq!(evaluated.get(), 3);
    }

    #[test]
    fn test_input_is_untouched() {
        let ints = list![1, 2, 3];
        let snapshot: Vec<i64> = ints.iter().copied().collect();
        let _ = sum(&ints);
        assert_eq!(ints.iter().copied().collect::<Vec<_>>(), snapshot);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "attempt to add with overflow")]
    fn test_sum_overflow_panics_in_debug() {
        let _ = sum(&list![i64::MAX, 1]);
    }
}
