/// Opaque identifier for one scheduled evaluation run.
/// Example: `3_A_BA_BB`
pub type RunId = String;
/// Label identifying one subtree of a candidate partition.
/// Examples: `A`, `BA`, `BBA`
pub type GroupLabel = String;
