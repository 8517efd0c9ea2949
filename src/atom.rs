/// Default atom type for a sketched molecular graph node.
///
/// `Atom` stores the properties a sketch records for each drawn atom: the
/// element, a formal charge, and the drawing position. Everything the layout
/// reconstruction needs from an atom is its position; the rest travels along
/// so fragments copied into a reaction stay meaningful to downstream
/// consumers.
///
/// # Examples
///
/// ```
/// use sketchrxn::Atom;
///
/// let carbon = Atom {
///     atomic_num: 6,
///     formal_charge: 0,
///     position_2d: Some([1.5, -0.25]),
/// };
/// assert_eq!(carbon.atomic_num, 6);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Atom {
    /// Atomic number (1 = H, 6 = C, 7 = N, …). Identifies the element.
    pub atomic_num: u8,
    /// Formal charge in elementary charge units.
    pub formal_charge: i8,
    /// Drawing position on the sketch canvas, `[x, y]` with y growing upward.
    ///
    /// `None` for an atom the source document left unplaced. Unplaced atoms
    /// contribute nothing to a fragment's bounding box.
    pub position_2d: Option<[f64; 2]>,
}

impl Atom {
    /// Atom of the given element at a drawing position.
    pub fn at(atomic_num: u8, position: [f64; 2]) -> Self {
        Self {
            atomic_num,
            formal_charge: 0,
            position_2d: Some(position),
        }
    }
}

impl crate::traits::HasAtomicNum for Atom {
    fn atomic_num(&self) -> u8 {
        self.atomic_num
    }
}

impl crate::traits::HasFormalCharge for Atom {
    fn formal_charge(&self) -> i8 {
        self.formal_charge
    }
}

impl crate::traits::HasPosition2D for Atom {
    fn position_2d(&self) -> Option<[f64; 2]> {
        self.position_2d
    }

    fn set_position_2d(&mut self, pos: Option<[f64; 2]>) {
        self.position_2d = pos;
    }
}
