//! Hover hit testing over a layer.
//!
//! Every element is tested and has its hover flag updated on each pass, so
//! overlapped elements still draw their outline. The hover target is then the
//! last (topmost) element whose flag is set.

use crate::profile_scope;
use crate::types::{Element, ElementId, Layer, WorldPoint};

/// Update every element's hover flag for `point` and return the topmost hit.
pub fn find_topmost_hover_target<E: Element>(layer: &mut Layer<E>, point: WorldPoint) -> Option<ElementId> {
    profile_scope!("hit_test_elements");

    for element in layer.iter_mut() {
        let hit = element.contains_point(point);
        element.set_hovered(hit);
    }

    layer
        .iter()
        .rev()
        .find(|element| element.is_hovered())
        .map(|element| element.id())
}
