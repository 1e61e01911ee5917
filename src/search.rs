//! 오름차순 구간 목록에서 "값을 넘는 첫 구간" 을 찾는 공용 탐색.

/// `items` 는 상한 기준 오름차순이어야 한다.
///
/// - `exceeds(item)` 이 참인 첫 항목을 고른다.
/// - `skip(item)` 이 참인 항목은 (첫 항목이 아닌 한) 선택하지 않는다. 대신 바로
///   앞의 더 작은 구간이 건너뛴 구간의 범위까지 떠맡는다.
pub fn find_range<T>(
    items: &[T],
    exceeds: impl Fn(&T) -> bool,
    skip: impl Fn(&T) -> bool,
) -> Option<usize> {
    for (i, item) in items.iter().enumerate() {
        if i > 0 && skip(item) {
            continue;
        }
        if exceeds(item) {
            return Some(i);
        }
        if let Some(next) = items.get(i + 1) {
            if skip(next) && exceeds(next) {
                return Some(i);
            }
        }
    }
    None
}

/// 건너뛰기 없이 `exceeds` 가 참인 첫 항목을 찾는다.
pub fn find_first<T>(items: &[T], exceeds: impl Fn(&T) -> bool) -> Option<usize> {
    find_range(items, exceeds, |_| false)
}
