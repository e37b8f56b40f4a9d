/// One entry of a run-length encoded sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum RleItem<T> {
    Literal(T),
    /// `count` is always at least 2.
    Repeat { count: usize, value: T },
}

impl<T> RleItem<T> {
    pub fn value(&self) -> &T {
        match self {
            RleItem::Literal(value) | RleItem::Repeat { value, .. } => value,
        }
    }

    pub fn count(&self) -> usize {
        match self {
            RleItem::Literal(_) => 1,
            RleItem::Repeat { count, .. } => *count,
        }
    }
}

/// Collapses maximal runs of equal consecutive records.
pub fn collapse_runs<T: PartialEq>(records: Vec<T>) -> Vec<RleItem<T>> {
    let mut items = Vec::new();
    let mut current: Option<(T, usize)> = None;

    for record in records {
        current = match current.take() {
            Some((value, count)) if value == record => Some((value, count + 1)),
            Some(run) => {
                items.push(finish_run(run));
                Some((record, 1))
            }
            None => Some((record, 1)),
        };
    }
    if let Some(run) = current {
        items.push(finish_run(run));
    }

    items
}

/// Inverse of [`collapse_runs`].
pub fn expand_runs<T: Clone>(items: &[RleItem<T>]) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        out.extend(std::iter::repeat_n(item.value(), item.count()).cloned());
    }
    out
}

fn finish_run<T>((value, count): (T, usize)) -> RleItem<T> {
    if count > 1 {
        RleItem::Repeat { count, value }
    } else {
        RleItem::Literal(value)
    }
}
