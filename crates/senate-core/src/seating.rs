//! # Seating Layout Generator
//!
//! Maps an ordered member list onto concentric arcs for the chamber
//! graphic. Members are cut into consecutive groups of `group_size`; each
//! group walks an arc from its own origin. Successive groups start further
//! left and take shorter steps, which nests the arcs.
//!
//! For a group `g` the walk is:
//!
//! ```text
//! origin   = (origin_x - g * x_decrement, origin_y)
//! distance = initial_distance - g * distance_decrement
//! index    = first_index
//! for each member:
//!     x += distance * cos(angle_step * index)
//!     y += distance * sin(angle_step * index)
//!     index += 1
//!     seat = (x, y)
//! ```
//!
//! The layout is a pure function of the input order and parameters.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::identity::MemberId;
use crate::member::{MemberRecord, Party};

/// Parameters of the arc walk. [`Default`] reproduces the chamber graphic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeatingParams {
    pub group_size: NonZeroUsize,
    pub origin_x: f64,
    pub origin_y: f64,
    pub initial_distance: f64,
    /// Radians per angular index step.
    pub angle_step: f64,
    /// Angular index of the first seat in every group.
    pub first_index: u32,
    pub x_decrement: f64,
    pub distance_decrement: f64,
}

/// Members per arc in the chamber graphic.
pub const DEFAULT_GROUP_SIZE: NonZeroUsize = match NonZeroUsize::new(20) {
    Some(n) => n,
    None => unreachable!(),
};

impl Default for SeatingParams {
    fn default() -> Self {
        Self {
            group_size: DEFAULT_GROUP_SIZE,
            origin_x: 800.0,
            origin_y: 20.0,
            initial_distance: 40.0,
            angle_step: 0.1571,
            first_index: 10,
            x_decrement: 27.5,
            distance_decrement: 4.0,
        }
    }
}

impl SeatingParams {
    /// Default parameters with a different group size.
    pub fn with_group_size(group_size: NonZeroUsize) -> Self {
        Self {
            group_size,
            ..Self::default()
        }
    }
}

/// A positioned member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    pub member_id: MemberId,
    pub party: Party,
    /// Portrait shown when the seat is hovered.
    pub image_url: Option<String>,
    pub x: f64,
    pub y: f64,
}

impl Seat {
    pub fn color(&self) -> &'static str {
        self.party.seat_color()
    }
}

/// One arc of seats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatGroup {
    pub index: usize,
    pub origin_x: f64,
    pub origin_y: f64,
    pub distance: f64,
    pub seats: Vec<Seat>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeatingLayout {
    pub groups: Vec<SeatGroup>,
}

impl SeatingLayout {
    /// Every seat in input order.
    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.groups.iter().flat_map(|g| g.seats.iter())
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.seats.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Lay out `records` in input order. An empty list yields no groups; a
/// final partial group uses the same origin and angle logic.
pub fn compute_seating_layout(records: &[&MemberRecord], params: &SeatingParams) -> SeatingLayout {
    let groups = records
        .chunks(params.group_size.get())
        .enumerate()
        .map(|(index, chunk)| layout_group(index, chunk, params))
        .collect();
    SeatingLayout { groups }
}

fn layout_group(index: usize, members: &[&MemberRecord], params: &SeatingParams) -> SeatGroup {
    let g = index as f64;
    let origin_x = params.origin_x - g * params.x_decrement;
    let origin_y = params.origin_y;
    let distance = params.initial_distance - g * params.distance_decrement;

    let (mut x, mut y) = (origin_x, origin_y);
    let first = f64::from(params.first_index);
    let seats = members
        .iter()
        .enumerate()
        .map(|(i, member)| {
            // Index in f64 so a large configured first_index cannot overflow.
            let angle = params.angle_step * (first + i as f64);
            x += distance * angle.cos();
            y += distance * angle.sin();
            Seat {
                member_id: member.id.clone(),
                party: member.party,
                image_url: member.image_url.clone(),
                x,
                y,
            }
        })
        .collect();

    SeatGroup {
        index,
        origin_x,
        origin_y,
        distance,
        seats,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::member::fixtures::record;
    use proptest::prelude::*;

    proptest! {
        /// Groups are full except possibly the last, and every member gets
        /// exactly one seat.
        #[test]
        fn groups_partition_the_input(n in 0usize..120, size in 1usize..30) {
            let records: Vec<MemberRecord> = (0..n)
                .map(|i| record(&format!("M{i:03}"), "First", "Last"))
                .collect();
            let refs: Vec<&MemberRecord> = records.iter().collect();
            let group_size = NonZeroUsize::new(size).unwrap();
            let layout = compute_seating_layout(&refs, &SeatingParams::with_group_size(group_size));

            prop_assert_eq!(layout.len(), n);
            prop_assert_eq!(layout.groups.len(), n.div_ceil(size));
            if let Some((last, full)) = layout.groups.split_last() {
                prop_assert!(full.iter().all(|g| g.seats.len() == size));
                prop_assert!(!last.seats.is_empty() && last.seats.len() <= size);
            }
            for (i, g) in layout.groups.iter().enumerate() {
                prop_assert_eq!(g.index, i);
                prop_assert_eq!(g.origin_x, 800.0 - i as f64 * 27.5);
            }
        }
    }
}
