//! Visibility filter.

use std::borrow::Cow;

use crate::Placement;

/// Placements whose widget is visible, in their original order.
///
/// Borrows the input when every widget is visible. Each widget is asked once.
pub fn visible_placements(placements: &[Placement]) -> Cow<'_, [Placement]> {
    let mut filtered: Option<Vec<Placement>> = None;

    for (index, placement) in placements.iter().enumerate() {
        let visible = placement.widget().is_visible();
        if let Some(list) = filtered.as_mut() {
            if visible {
                list.push(placement.clone());
            }
        } else if !visible {
            filtered = Some(placements[..index].to_vec());
        }
    }

    match filtered {
        Some(list) => Cow::Owned(list),
        None => Cow::Borrowed(placements),
    }
}
