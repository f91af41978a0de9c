pub const ALL_PLAYS: [Play; 4] = [
    Play::Touchdown,
    Play::FieldGoal,
    Play::TwoPoint,
    Play::ExtraPoint,
];

/// The fixed scoring events offered by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Play {
    Touchdown,
    FieldGoal,
    TwoPoint,
    ExtraPoint,
}

impl Play {
    pub fn points(&self) -> i32 {
        match self {
            Play::Touchdown => 6,
            Play::FieldGoal => 3,
            Play::TwoPoint => 2,
            Play::ExtraPoint => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Play::Touchdown => "Touchdown",
            Play::FieldGoal => "Field Goal",
            Play::TwoPoint => "Two Points",
            Play::ExtraPoint => "Extra Point",
        }
    }
}
