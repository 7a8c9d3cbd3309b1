use crate::error::ConnectError;

/// Split `elements` into `num_groups` contiguous groups of near-equal size.
///
/// Group sizes differ by at most one and larger groups come first, so seven
/// elements in three groups yield sizes `[3, 2, 2]`. Element order is kept,
/// which keeps related elements together when the input is sorted. When there
/// are fewer elements than groups the trailing groups are empty.
pub fn group_partitions<T>(
    elements: Vec<T>,
    num_groups: usize,
) -> Result<Vec<Vec<T>>, ConnectError> {
    if num_groups == 0 {
        return Err(ConnectError::InvalidGroupCount { num_groups });
    }

    let per_group = elements.len() / num_groups;
    let leftover = elements.len() % num_groups;

    let mut remaining = elements.into_iter();
    let groups = (0..num_groups)
        .map(|group| {
            let size = if group < leftover {
                per_group + 1
            } else {
                per_group
            };
            remaining.by_ref().take(size).collect()
        })
        .collect();
    Ok(groups)
}
