//! Fixed pip positions for each face, relative to the center of the die.
//!
//! Screen axes: +x right, +y down. Face 6 spreads its outer rows by an
//! extra [`PIP_SPACING`] so the three pairs do not crowd the middle.

use glam::IVec2;

use crate::die::DieValue;

pub const PIP_OFFSET: i32 = 50;
pub const PIP_SPACING: i32 = 26;

const O: i32 = PIP_OFFSET;
const S: i32 = PIP_OFFSET + PIP_SPACING;

const FACE_1: [IVec2; 1] = [IVec2::ZERO];
const FACE_2: [IVec2; 2] = [IVec2::new(-O, -O), IVec2::new(O, O)];
const FACE_3: [IVec2; 3] = [IVec2::new(-O, -O), IVec2::ZERO, IVec2::new(O, O)];
const FACE_4: [IVec2; 4] = [
    IVec2::new(-O, -O),
    IVec2::new(O, -O),
    IVec2::new(-O, O),
    IVec2::new(O, O),
];
const FACE_5: [IVec2; 5] = [
    IVec2::new(-O, -O),
    IVec2::new(O, -O),
    IVec2::ZERO,
    IVec2::new(-O, O),
    IVec2::new(O, O),
];
const FACE_6: [IVec2; 6] = [
    IVec2::new(-O, -S),
    IVec2::new(O, -S),
    IVec2::new(-O, 0),
    IVec2::new(O, 0),
    IVec2::new(-O, S),
    IVec2::new(O, S),
];

const PIP_LAYOUT: [&[IVec2]; 6] = [&FACE_1, &FACE_2, &FACE_3, &FACE_4, &FACE_5, &FACE_6];

pub fn pip_offsets(face: DieValue) -> &'static [IVec2] {
    PIP_LAYOUT[face.index()]
}
