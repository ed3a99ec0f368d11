// Tile and draw constants for the standard game
pub const SMALL_TILES: [u32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
pub const SMALL_TILE_COPIES: usize = 2;
pub const LARGE_TILES: [u32; 4] = [25, 50, 75, 100];
pub const DRAW_SIZE: usize = 6;
pub const TARGET_MIN: u32 = 100;
pub const TARGET_MAX: u32 = 999;
