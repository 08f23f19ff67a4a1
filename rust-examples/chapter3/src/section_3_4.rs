//! 3.4절: 리스트에 대한 재귀와 고차 함수로의 일반화
//! (Section 3.4: Recursion over Lists and Generalizing to Higher-Order Functions)
//!
//! 이 절에서는 다음을 보여줍니다:
//! - `fold_right`: 정의 그대로의 재귀 (스택 깊이 = 리스트 길이)
//! - `fold_left`: 꼬리 재귀를 반복문으로 (O(1) 스택)
//! - 두 fold로 표현한 length, sum, product, append, reverse
//! - map, filter, flat_map, zip_with 같은 관습적 인터페이스 (Conventional interfaces)

use fp_common::ImmutableList;

use crate::section_3_3::drop;

// =============================================================================
// 접기 (Folds)
// =============================================================================

/// 오른쪽 접기 (Right fold).
///
/// `fold_right(Node(x, xs), z, f) = f(x, fold_right(xs, z, f))`
///
/// 꼬리 재귀가 아니므로 아주 긴 리스트에서는 스택이 넘칠 수 있다. 그런 경우
/// [`fold_right_via_fold_left`]를 쓴다.
///
/// # Example
/// ```
/// use fp_common::list;
/// use fp_chapter3::section_3_4::fold_right;
///
/// let shape = fold_right(&list![1, 2, 3], "nil".to_string(), |x, acc| format!("({x} . {acc})"));
/// assert_eq!(shape, "(1 . (2 . (3 . nil)))");
/// ```
pub fn fold_right<T, B, F>(list: &ImmutableList<T>, zero: B, combine: F) -> B
where
    F: Fn(&T, B) -> B,
{
    fn go<T, B, F>(list: &ImmutableList<T>, zero: B, combine: &F) -> B
    where
        F: Fn(&T, B) -> B,
    {
        match list {
            ImmutableList::Empty => zero,
            ImmutableList::Node(node) => combine(&node.value, go(&node.rest, zero, combine)),
        }
    }
    go(list, zero, &combine)
}

/// 왼쪽 접기 (Left fold, 반복적 누산).
///
/// `fold_left(Node(x, xs), z, f) = fold_left(xs, f(z, x), f)` 를 반복문으로 푼다.
///
/// # Example
/// ```
/// use fp_common::list;
/// use fp_chapter3::section_3_4::fold_left;
///
/// assert_eq!(fold_left(&list![1, 2, 3], 0, |acc, x| acc - x), -6);
/// ```
pub fn fold_left<T, B, F>(list: &ImmutableList<T>, zero: B, mut combine: F) -> B
where
    F: FnMut(B, &T) -> B,
{
    let mut acc = zero;
    let mut rest = list;
    while let ImmutableList::Node(node) = rest {
        acc = combine(acc, &node.value);
        rest = &node.rest;
    }
    acc
}

/// `fold_left`로 만든 오른쪽 접기 (스택 안전).
///
/// 뒤집은 리스트를 왼쪽으로 접으면 결과와 결합 순서가 `fold_right`와 같다.
pub fn fold_right_via_fold_left<T, B, F>(list: &ImmutableList<T>, zero: B, combine: F) -> B
where
    T: Clone,
    F: Fn(&T, B) -> B,
{
    fold_left(&reverse(list), zero, |acc, x| combine(x, acc))
}

// =============================================================================
// fold로 표현한 기본 연산들
// =============================================================================

/// `fold_right`를 사용한 길이
pub fn length<T>(list: &ImmutableList<T>) -> usize {
    fold_right(list, 0, |_, acc| acc + 1)
}

/// `fold_left`를 사용한 길이 (긴 리스트에도 안전)
pub fn length_left<T>(list: &ImmutableList<T>) -> usize {
    fold_left(list, 0, |acc, _| acc + 1)
}

/// `fold_left`를 사용한 합.
///
/// 넘침(overflow)은 `section_3_2::sum`과 같다: 디버그 빌드에서 패닉, 릴리스 빌드에서 wrap.
pub fn sum_left(ints: &ImmutableList<i64>) -> i64 {
    fold_left(ints, 0, |acc, x| acc + x)
}

/// `fold_left`를 사용한 곱.
///
/// `section_3_2::product`와 달리 0.0에서 멈추지 않는다.
pub fn product_left(ds: &ImmutableList<f64>) -> f64 {
    fold_left(ds, 1.0, |acc, x| acc * x)
}

/// 리스트 뒤집기
pub fn reverse<T: Clone>(list: &ImmutableList<T>) -> ImmutableList<T> {
    fold_left(list, ImmutableList::new(), |acc, x| ImmutableList::cons(x.clone(), acc))
}

/// 두 리스트 합치기.
///
/// `a`는 새로 만들고 `b`는 복사 없이 그대로 공유한다 (`a` is rebuilt, `b` is shared).
///
/// # Example
/// ```
/// use fp_common::list;
/// use fp_chapter3::section_3_4::append;
///
/// let b = list![3, 4];
/// let joined = append(&list![1, 2], &b);
/// assert_eq!(joined, list![1, 2, 3, 4]);
/// ```
pub fn append<T: Clone>(a: &ImmutableList<T>, b: &ImmutableList<T>) -> ImmutableList<T> {
    let prefix: Vec<&T> = a.iter().collect();
    prefix
        .into_iter()
        .rev()
        .fold(b.clone(), |acc, x| ImmutableList::cons(x.clone(), acc))
}

/// `fold_right`를 사용한 append
pub fn append_via_fold_right<T: Clone>(
    a: &ImmutableList<T>,
    b: &ImmutableList<T>,
) -> ImmutableList<T> {
    fold_right(a, b.clone(), |x, acc| ImmutableList::cons(x.clone(), acc))
}

/// 리스트의 리스트를 하나로 이어 붙인다 (전체 길이에 선형).
///
/// 오른쪽부터 붙이므로 각 원소는 한 번만 복사된다.
pub fn concat<T: Clone>(lists: &ImmutableList<ImmutableList<T>>) -> ImmutableList<T> {
    fold_right_via_fold_left(lists, ImmutableList::new(), |list, acc| append(list, &acc))
}

// =============================================================================
// 관습적인 인터페이스 (Conventional Interfaces)
// =============================================================================

/// 리스트에 함수 매핑 (Map).
///
/// 순서와 길이를 유지하고 입력은 건드리지 않는다.
///
/// # Example
/// ```
/// use fp_common::list;
/// use fp_chapter3::section_3_4::map;
///
/// assert_eq!(map(&list![1, 2, 3], |x| x * 2), list![2, 4, 6]);
/// let shown = map(&list![1.5, 2.0], |d: &f64| d.to_string());
/// assert_eq!(shown, list!["1.5".to_string(), "2".to_string()]);
/// ```
pub fn map<T, U, F>(list: &ImmutableList<T>, transform: F) -> ImmutableList<U>
where
    F: FnMut(&T) -> U,
{
    list.iter().map(transform).collect()
}

/// 술어(predicate)를 만족하는 원소 필터링
pub fn filter<T, P>(list: &ImmutableList<T>, mut predicate: P) -> ImmutableList<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    list.iter().filter(|&x| predicate(x)).cloned().collect()
}

/// 플랫맵 (Flatmap): 각 원소를 리스트로 바꾼 뒤 이어 붙인다
pub fn flat_map<T, U, F>(list: &ImmutableList<T>, transform: F) -> ImmutableList<U>
where
    U: Clone,
    F: FnMut(&T) -> ImmutableList<U>,
{
    concat(&map(list, transform))
}

/// 두 리스트를 원소별로 결합한다. 짧은 쪽 길이에서 멈춘다.
pub fn zip_with<A, B, C, F>(
    a: &ImmutableList<A>,
    b: &ImmutableList<B>,
    mut combine: F,
) -> ImmutableList<C>
where
    F: FnMut(&A, &B) -> C,
{
    a.iter().zip(b.iter()).map(|(x, y)| combine(x, y)).collect()
}

/// `sub`가 `list` 안에 연속된 부분으로 들어 있는지 (contiguous subsequence).
///
/// 빈 리스트는 모든 리스트의 부분 리스트다.
///
/// # Example
/// ```
/// use fp_common::list;
/// use fp_chapter3::section_3_4::has_subsequence;
///
/// let xs = list![1, 2, 3, 4];
/// assert!(has_subsequence(&xs, &list![2, 3]));
/// assert!(!has_subsequence(&xs, &list![1, 3]));
/// ```
pub fn has_subsequence<T: PartialEq>(list: &ImmutableList<T>, sub: &ImmutableList<T>) -> bool {
    fn starts_with<T: PartialEq>(list: &ImmutableList<T>, prefix: &ImmutableList<T>) -> bool {
        let mut items = list.iter();
        prefix.iter().all(|p| items.next() == Some(p))
    }

    let mut rest = list;
    loop {
        if starts_with(rest, sub) {
            return true;
        }
        if rest.is_empty() {
            return false;
        }
        rest = drop(rest, 1);
    }
}
