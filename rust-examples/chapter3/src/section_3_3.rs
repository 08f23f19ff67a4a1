//! 3.3절: 함수적 자료구조의 데이터 공유 (Section 3.3: Data Sharing in Functional Data Structures)
//!
//! 리스트는 불변이므로 꼬리(tail)를 복사하지 않고 그대로 공유할 수 있다
//! (Lists are immutable, so tails can be shared instead of copied).
//!
//! - `tail`, `drop`, `drop_while`: 기존 리스트의 접미부를 빌려서 돌려준다 (복사 없음)
//! - `set_head`: 원래 리스트 전체를 새 노드 뒤에 공유한다
//! - `init`, `take_while`: 앞부분만 새로 만든다
//!
//! ## 빈 리스트 정책 (Empty list policy)
//!
//! `tail`, `drop`, `init`은 빈 리스트에서 오류 없이 빈 리스트를 돌려준다.
//! 오류를 원하는 호출자를 위해 `try_tail`, `try_drop`, `try_init`을 따로 둔다
//! (The checked `try_*` variants report `ListError` instead).

use fp_common::{ImmutableList, ListError};

// =============================================================================
// 전체 함수 (Total operations)
// =============================================================================

/// 첫 원소를 제외한 리스트 (cdr).
///
/// 빈 리스트의 tail은 빈 리스트다 (The tail of `Empty` is `Empty`).
///
/// # Example
/// ```
/// use fp_common::{list, ImmutableList};
/// use fp_chapter3::section_3_3::tail;
///
/// assert_eq!(tail(&list![1, 2, 3]), &list![2, 3]);
///
/// let empty: ImmutableList<i32> = list![];
/// assert!(tail(&empty).is_empty());
/// ```
pub fn tail<T>(list: &ImmutableList<T>) -> &ImmutableList<T> {
    match list {
        ImmutableList::Empty => list,
        ImmutableList::Node(node) => &node.rest,
    }
}

/// 리스트 앞에 `head`를 붙인다.
///
/// 이름과 달리 기존 첫 원소를 바꾸지 않는다: 원래 리스트 전체가 두 번째 원소부터 이어진다
/// (Prepends; the original head is kept as the second element).
///
/// # Example
/// ```
/// use fp_common::list;
/// use fp_chapter3::section_3_3::set_head;
///
/// assert_eq!(set_head(&list![1, 2, 3], 9), list![9, 1, 2, 3]);
/// ```
pub fn set_head<T>(list: &ImmutableList<T>, head: T) -> ImmutableList<T> {
    list.prepend(head)
}

/// 앞의 `n`개 원소를 제거한다.
///
/// `n`이 길이보다 크면 빈 리스트 (Past the end yields `Empty`).
pub fn drop<T>(list: &ImmutableList<T>, n: usize) -> &ImmutableList<T> {
    let mut rest = list;
    for _ in 0..n {
        match rest {
            ImmutableList::Empty => break,
            ImmutableList::Node(node) => rest = &node.rest,
        }
    }
    rest
}

/// 술어를 만족하는 가장 긴 접두부를 제거한다
/// (Removes the longest prefix whose elements all satisfy `predicate`).
///
/// 처음으로 거짓이 되는 원소에서 멈추고, 그 뒤는 모두 남긴다.
///
/// # Example
/// ```
/// use fp_common::list;
/// use fp_chapter3::section_3_3::drop_while;
///
/// assert_eq!(drop_while(&list![1, 2, 3, 0, 4], |&x| x < 3), &list![3, 0, 4]);
/// ```
pub fn drop_while<T, P>(list: &ImmutableList<T>, mut predicate: P) -> &ImmutableList<T>
where
    P: FnMut(&T) -> bool,
{
    let mut rest = list;
    while let ImmutableList::Node(node) = rest {
        if !predicate(&node.value) {
            break;
        }
        rest = &node.rest;
    }
    rest
}

/// 술어를 만족하는 가장 긴 접두부 (Longest prefix satisfying `predicate`).
///
/// `drop_while`과 짝을 이룬다: `append(take_while(l, p), drop_while(l, p)) == l`
pub fn take_while<T, P>(list: &ImmutableList<T>, mut predicate: P) -> ImmutableList<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    list.iter().take_while(|&x| predicate(x)).cloned().collect()
}

/// 마지막 원소를 제외한 리스트.
///
/// 한 번 훑어서 앞부분을 모은 뒤 뒤에서부터 붙이므로 O(n)
/// (Collects the prefix once, then conses it back from the end).
///
/// # Example
/// ```
/// use fp_common::list;
/// use fp_chapter3::section_3_3::init;
///
/// assert_eq!(init(&list![1, 2, 3]), list![1, 2]);
/// assert_eq!(init(&list![1]), list![]);
/// ```
pub fn init<T: Clone>(list: &ImmutableList<T>) -> ImmutableList<T> {
    let mut prefix: Vec<&T> = list.iter().collect();
    prefix.pop();
    prefix
        .into_iter()
        .rev()
        .fold(ImmutableList::new(), |acc, x| ImmutableList::cons(x.clone(), acc))
}

// =============================================================================
// 검사 버전 (Checked variants)
// =============================================================================

/// 빈 리스트면 오류를 돌려주는 `tail` (`tail` that rejects `Empty`).
pub fn try_tail<T>(list: &ImmutableList<T>) -> Result<&ImmutableList<T>, ListError> {
    match list {
        ImmutableList::Empty => {
            tracing::debug!("try_tail called on an empty list");
            Err(ListError::EmptyList { operation: "tail" })
        }
        ImmutableList::Node(node) => Ok(&node.rest),
    }
}

/// 길이보다 많이 버리려 하면 오류를 돌려주는 `drop`.
///
/// `n`이 길이와 같으면 빈 리스트를 돌려준다 (Dropping exactly all elements is fine).
pub fn try_drop<T>(list: &ImmutableList<T>, n: usize) -> Result<&ImmutableList<T>, ListError> {
    let mut rest = list;
    for dropped in 0..n {
        match rest {
            ImmutableList::Node(node) => rest = &node.rest,
            ImmutableList::Empty => {
                tracing::debug!(requested = n, length = dropped, "try_drop ran past the end");
                return Err(ListError::DropPastEnd {
                    requested: n,
                    length: dropped,
                });
            }
        }
    }
    Ok(rest)
}

/// 빈 리스트면 오류를 돌려주는 `init` (`init` that rejects `Empty`).
pub fn try_init<T: Clone>(list: &ImmutableList<T>) -> Result<ImmutableList<T>, ListError> {
    if list.is_empty() {
        tracing::debug!("try_init called on an empty list");
        return Err(ListError::EmptyList { operation: "init" });
    }
    Ok(init(list))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fp_common::list;
    use fp_common::strategy::immutable_list;
    use proptest::prelude::*;

    #[test]
    fn test_tail() {
        assert_eq!(tail(&list![1, 2, 3]), &list![2, 3]);
        assert_eq!(tail(&list![1]), &list![]);

        let empty: ImmutableList<i32> = list![];
        assert_eq!(tail(&empty), &list![]);
        assert_eq!(tail(tail(&empty)), &list![]);
    }

    #[test]
    fn test_tail_shares_structure() {
        let xs = list![1, 2, 3];
        let ys = xs.prepend(0);
        assert!(tail(&ys).ptr_eq(&xs));
    }

    #[test]
    fn test_set_head_prepends() {
        let xs = list![1, 2, 3];
        let ys = set_head(&xs, 9);
        assert_eq!(ys, list![9, 1, 2, 3]);
        assert_eq!(xs, list![1, 2, 3]);
        assert!(tail(&ys).ptr_eq(&xs));

        assert_eq!(set_head(&list![], 'a'), list!['a']);
    }

    #[test]
    fn test_drop() {
        let xs = list![1, 2, 3];
        assert_eq!(drop(&xs, 0), &list![1, 2, 3]);
        assert!(drop(&xs, 0).ptr_eq(&xs));
        assert_eq!(drop(&xs, 2), &list![3]);
        assert_eq!(drop(&xs, 3), &list![]);
        assert_eq!(drop(&xs, 5), &list![]);
        assert_eq!(drop(&ImmutableList::<i32>::new(), 1), &list![]);
    }

    #[test]
    fn test_drop_while() {
        assert_eq!(drop_while(&list![1, 2, 3, 0, 4], |&x| x < 3), &list![3, 0, 4]);
        assert_eq!(drop_while(&list![1, 2], |&x| x < 10), &list![]);
        assert_eq!(drop_while(&list![5, 1], |&x| x < 3), &list![5, 1]);
        assert_eq!(drop_while(&ImmutableList::<i32>::new(), |_| true), &list![]);
    }

    #[test]
    fn test_take_while() {
        assert_eq!(take_while(&list![1, 2, 3, 0, 4], |&x| x < 3), list![1, 2]);
        assert_eq!(take_while(&list![5, 1], |&x| x < 3), list![]);
    }

    #[test]
    fn test_init() {
        assert_eq!(init(&list![1, 2, 3]), list![1, 2]);
        assert_eq!(init(&list![1]), list![]);
        assert_eq!(init(&ImmutableList::<i32>::new()), list![]);
    }

    #[test]
    fn test_init_long_list() {
        let xs: ImmutableList<u32> = (0..100_000).collect();
        let ys = init(&xs);
        assert_eq!(ys.len(), 99_999);
        assert_eq!(ys.head(), Some(&0));
        assert_eq!(drop(&ys, 99_998).head(), Some(&99_998));
    }

    #[test]
    fn test_checked_variants() {
        let xs = list![1, 2, 3];
        let empty: ImmutableList<i32> = list![];

        assert_eq!(try_tail(&xs), Ok(&list![2, 3]));
        assert_eq!(try_tail(&empty), Err(ListError::EmptyList { operation: "tail" }));

        assert_eq!(try_drop(&xs, 3), Ok(&list![]));
        assert_eq!(
            try_drop(&xs, 5),
            Err(ListError::DropPastEnd {
                requested: 5,
                length: 3
            })
        );
        assert_eq!(try_drop(&empty, 0), Ok(&list![]));

        assert_eq!(try_init(&xs), Ok(list![1, 2]));
        assert_eq!(try_init(&empty), Err(ListError::EmptyList { operation: "init" }));
    }

    proptest! {
        #[test]
        fn drop_removes_a_prefix(xs in immutable_list(any::<i32>(), 0..50), n in 0usize..60) {
            let expected: Vec<i32> = xs.iter().copied().skip(n).collect();
            prop_assert_eq!(drop(&xs, n).iter().copied().collect::<Vec<_>>(), expected);
        }

        #[test]
        fn take_while_and_drop_while_partition(
            xs in immutable_list(0i32..10, 0..50),
            bound in 0i32..10,
        ) {
            let taken = take_while(&xs, |&x| x < bound);
            let rest = drop_while(&xs, |&x| x < bound);
            prop_assert_eq!(taken.len() + rest.len(), xs.len());
            let rejoined: Vec<i32> = taken.iter().chain(rest.iter()).copied().collect();
            prop_assert_eq!(rejoined, xs.iter().copied().collect::<Vec<_>>());
        }

        #[test]
        fn init_drops_the_last_element(xs in immutable_list(any::<i32>(), 0..50)) {
            let mut expected: Vec<i32> = xs.iter().copied().collect();
            expected.pop();
            prop_assert_eq!(init(&xs), ImmutableList::from(expected));
        }
    }
}
