//! Fixed rule tables of the map schema.
//!
//! These are small closed sets that belong to the game data itself, so they
//! live here as constants rather than in configuration.

/// Category code of the cavern map, the only category with a coordinate
/// transform and a day-2 overlay.
pub const CAVERN_CATEGORY: i64 = 4;

/// Construct type codes drawn before every other construct.
pub const SPECIAL_CONSTRUCT_TYPES: [i64; 3] = [49410, 49420, 49430];

/// Location indices that sit on the lower cavern level.
pub const UNDERGROUND_LOCATIONS: [i64; 8] = [1160, 1159, 1107, 1110, 1153, 1175, 1174, 1213];

/// Tower floor locations and the label prefix of each floor.
///
/// Constructs placed at one of these locations get a floor label instead of
/// an icon.
pub const FLOOR_PREFIXES: [(i64, &str); 6] = [
	(1111, "1F "),
	(1112, "2F "),
	(1113, "3F "),
	(1114, "1F "),
	(1115, "2F "),
	(1116, "3F "),
];

/// Event flags that add the frenzy overlay.
pub const FRENZY_EVENT_FLAGS: [i64; 2] = [7707, 7727];

/// Event flags whose caption also names the event value.
pub const VALUED_EVENT_FLAGS: [i64; 2] = [7705, 7725];

/// Cavern coordinate transform parameters.
pub mod cavern {
	/// Uniform scale applied to both axes
	pub const SCALE: f64 = 1.0186;

	/// Translation applied after scaling
	pub const OFFSET: (f64, f64) = (-306.0, -260.0);

	/// Additional translation for underground locations
	pub const UNDERGROUND_SHIFT: (f64, f64) = (862.0, 355.0);
}

/// Returns `true` if `kind` is drawn in the special construct pass.
pub fn is_special_construct(kind: i64) -> bool {
	SPECIAL_CONSTRUCT_TYPES.contains(&kind)
}

/// Returns `true` if `location` is on the lower cavern level.
pub fn is_underground(location: i64) -> bool {
	UNDERGROUND_LOCATIONS.contains(&location)
}

/// Returns the floor label prefix for a tower floor location.
pub fn floor_prefix(location: i64) -> Option<&'static str> {
	FLOOR_PREFIXES
		.iter()
		.find(|(index, _)| *index == location)
		.map(|(_, prefix)| *prefix)
}

/// Returns `true` if the event flag adds the frenzy overlay.
pub fn is_frenzy_event(flag: i64) -> bool {
	FRENZY_EVENT_FLAGS.contains(&flag)
}

/// Returns `true` if the caption for this event flag includes the event value.
pub fn is_valued_event(flag: i64) -> bool {
	VALUED_EVENT_FLAGS.contains(&flag)
}
