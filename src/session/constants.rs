// Session defaults and console texts
pub const THINK_SECONDS: u64 = 40;
pub const COUNTDOWN_WIDTH: usize = 30;
pub const SOLUTION_PROMPT: &str = "Want a solution ?";
pub const ANOTHER_GAME_PROMPT: &str = "Want another game ?";
pub const EXACT_LABEL: &str = "Exact";
pub const APPROXIMATE_LABEL: &str = "Approché";
