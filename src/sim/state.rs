//! Game state and core simulation types
//!
//! Everything the tick mutates lives in [`GameState`], the single owner of
//! the ball, paddle and brick grid.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Boundary rules that fired during one [`Ball::advance`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundaryContacts {
    /// Hit the left or right wall (x-velocity flipped)
    pub side_wall: bool,
    /// Hit the top wall (y-velocity flipped)
    pub ceiling: bool,
    /// Crossed the bottom edge and was sent back to spawn
    pub lost: bool,
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner of the bounding box
    pub pos: IVec2,
    /// Pixels per tick
    pub vel: IVec2,
}

impl Default for Ball {
    fn default() -> Self {
        Self::spawn()
    }
}

impl Ball {
    pub const DIAMETER: i32 = BALL_DIAMETER;

    pub fn new(pos: IVec2, vel: IVec2) -> Self {
        Self { pos, vel }
    }

    /// Ball at the spawn point with the initial velocity
    pub fn spawn() -> Self {
        Self::new(BALL_SPAWN, BALL_START_VEL)
    }

    /// Move by one tick of velocity, then apply the window boundary rules
    ///
    /// Order is fixed: side walls, then ceiling, then the bottom reset. The
    /// reset overrides any flip applied earlier in the same call.
    pub fn advance(&mut self) -> BoundaryContacts {
        let mut contacts = BoundaryContacts::default();
        self.pos += self.vel;

        if self.pos.x <= 0 || self.pos.x >= WINDOW_WIDTH - Self::DIAMETER {
            self.reverse_x();
            contacts.side_wall = true;
        }

        if self.pos.y <= 0 {
            self.reverse_y();
            contacts.ceiling = true;
        }

        if self.pos.y >= WINDOW_HEIGHT {
            *self = Self::spawn();
            contacts.lost = true;
        }

        contacts
    }

    #[inline]
    pub fn reverse_x(&mut self) {
        self.vel.x = -self.vel.x;
    }

    #[inline]
    pub fn reverse_y(&mut self) {
        self.vel.y = -self.vel.y;
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, Self::DIAMETER, Self::DIAMETER)
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner; y never changes after construction
    pub pos: IVec2,
}

impl Default for Paddle {
    fn default() -> Self {
        Self { pos: PADDLE_START }
    }
}

impl Paddle {
    pub const WIDTH: i32 = PADDLE_WIDTH;
    pub const HEIGHT: i32 = PADDLE_HEIGHT;

    /// Paddle at `x`, clamped onto the screen
    pub fn at(x: i32) -> Self {
        let mut paddle = Self::default();
        paddle.pos.x = x.clamp(0, PADDLE_MAX_X);
        paddle
    }

    /// Move horizontally by a signed offset, staying inside the window
    pub fn shift(&mut self, offset: i32) {
        self.pos.x = self.pos.x.saturating_add(offset).clamp(0, PADDLE_MAX_X);
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, Self::WIDTH, Self::HEIGHT)
    }
}

/// A destructible brick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brick {
    pos: IVec2,
    visible: bool,
}

impl Brick {
    pub const WIDTH: i32 = BRICK_WIDTH;
    pub const HEIGHT: i32 = BRICK_HEIGHT;

    pub fn new(pos: IVec2) -> Self {
        Self { pos, visible: true }
    }

    pub fn pos(&self) -> IVec2 {
        self.pos
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, Self::WIDTH, Self::HEIGHT)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Visibility only goes one way: a hidden brick ignores `true`
    pub fn set_visible(&mut self, visible: bool) {
        self.visible &= visible;
    }
}

/// The bricks, stored row-major
///
/// Iteration order decides which brick wins when the ball overlaps several at
/// once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickGrid {
    bricks: Vec<Brick>,
}

impl Default for BrickGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl BrickGrid {
    /// Standard 5x10 layout
    pub fn new() -> Self {
        let bricks = (0..BRICK_ROWS)
            .flat_map(|row| (0..BRICK_COLS).map(move |col| (row, col)))
            .map(|(row, col)| {
                let offset = IVec2::new(col as i32, row as i32) * BRICK_SPACING;
                Brick::new(BRICK_ORIGIN + offset)
            })
            .collect();
        Self { bricks }
    }

    /// Grid with a custom set of bricks (kept in the given order)
    pub fn from_bricks(bricks: Vec<Brick>) -> Self {
        Self { bricks }
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    /// Brick at a row/column of the standard layout
    pub fn get(&self, row: usize, col: usize) -> Option<&Brick> {
        if col >= BRICK_COLS {
            return None;
        }
        self.bricks.get(row * BRICK_COLS + col)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    /// Hide the brick at a grid index, returning true if it was visible
    pub fn hide(&mut self, index: usize) -> bool {
        match self.bricks.get_mut(index) {
            Some(brick) if brick.is_visible() => {
                brick.set_visible(false);
                true
            }
            _ => false,
        }
    }

    pub fn visible_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.is_visible()).count()
    }

    /// True once every brick has been destroyed
    pub fn is_cleared(&self) -> bool {
        self.visible_count() == 0
    }
}

/// Something observable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the left or right wall
    WallBounce,
    /// Ball bounced off the top wall
    CeilingBounce,
    /// Ball crossed the bottom and respawned
    BallLost,
    /// Ball touched the paddle
    PaddleHit,
    /// Brick at this grid index was destroyed
    BrickDestroyed { index: usize },
    /// The last visible brick was destroyed
    AllBricksCleared,
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Number of times the ball crossed the bottom
    pub balls_lost: u32,
    /// Events produced by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game: ball at spawn, paddle centered, full grid
    pub fn new() -> Self {
        Self::with_entities(Ball::spawn(), Paddle::default(), BrickGrid::new())
    }

    pub fn with_entities(ball: Ball, paddle: Paddle, bricks: BrickGrid) -> Self {
        Self {
            ball,
            paddle,
            bricks,
            time_ticks: 0,
            balls_lost: 0,
            events: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ball_moves_by_velocity() {
        let mut ball = Ball::new(IVec2::new(400, 300), IVec2::new(2, -2));
        let contacts = ball.advance();

        assert_eq!(ball.pos, IVec2::new(402, 298));
        assert_eq!(ball.vel, IVec2::new(2, -2));
        assert_eq!(contacts, BoundaryContacts::default());
    }

    #[test]
    fn test_ball_bounces_off_left_wall() {
        // Lands exactly on x=0 moving left
        let mut ball = Ball::new(IVec2::new(2, 300), IVec2::new(-2, 2));
        let contacts = ball.advance();
        assert_eq!(ball.pos.x, 0);
        assert_eq!(ball.vel.x, 2);
        assert!(contacts.side_wall);

        ball.advance();
        assert_eq!(ball.pos.x, 2);
        assert_eq!(ball.vel.x, 2);
    }

    #[test]
    fn test_ball_at_zero_moving_left_reverses() {
        let mut ball = Ball::new(IVec2::new(0, 300), IVec2::new(-2, 2));
        ball.advance();
        // Overshoots one tick, now heading right
        assert_eq!(ball.pos.x, -2);
        assert_eq!(ball.vel.x, 2);
    }

    #[test]
    fn test_ball_bounces_off_right_wall() {
        let mut ball = Ball::new(IVec2::new(778, 300), IVec2::new(2, 2));
        let contacts = ball.advance();
        assert_eq!(ball.pos.x, 780);
        assert_eq!(ball.vel.x, -2);
        assert!(contacts.side_wall);
    }

    #[test]
    fn test_ball_bounces_off_ceiling() {
        let mut ball = Ball::new(IVec2::new(300, 1), IVec2::new(2, -2));
        let contacts = ball.advance();
        assert_eq!(ball.vel.y, 2);
        assert!(contacts.ceiling);
        assert!(!contacts.side_wall);
    }

    #[test]
    fn test_ball_corner_flips_both_axes() {
        let mut ball = Ball::new(IVec2::new(2, 2), IVec2::new(-2, -2));
        let contacts = ball.advance();
        assert_eq!(ball.vel, IVec2::new(2, 2));
        assert!(contacts.side_wall && contacts.ceiling);
    }

    #[test]
    fn test_ball_resets_after_bottom() {
        let mut ball = Ball::new(IVec2::new(123, 597), IVec2::new(-3, 5));
        let contacts = ball.advance();

        assert!(contacts.lost);
        assert_eq!(ball.pos, IVec2::new(400, 300));
        assert_eq!(ball.vel, IVec2::new(2, -2));
    }

    #[test]
    fn test_reset_overrides_wall_flip() {
        // Bottom-left corner: side flip happens first, reset wins
        let mut ball = Ball::new(IVec2::new(1, 599), IVec2::new(-2, 2));
        let contacts = ball.advance();
        assert!(contacts.side_wall && contacts.lost);
        assert_eq!(ball, Ball::spawn());
    }

    #[test]
    fn test_ball_bounds() {
        let ball = Ball::new(IVec2::new(10, 20), IVec2::ZERO);
        assert_eq!(ball.bounds(), Rect::new(10, 20, 20, 20));
    }

    #[test]
    fn test_paddle_clamps_right() {
        let mut paddle = Paddle::at(690);
        paddle.shift(15);
        assert_eq!(paddle.pos.x, 700);
    }

    #[test]
    fn test_paddle_clamps_left() {
        let mut paddle = Paddle::at(10);
        paddle.shift(-15);
        assert_eq!(paddle.pos.x, 0);
    }

    #[test]
    fn test_paddle_y_is_fixed() {
        let mut paddle = Paddle::default();
        paddle.shift(-15);
        paddle.shift(i32::MAX);
        assert_eq!(paddle.pos.y, 550);
        assert_eq!(paddle.bounds(), Rect::new(700, 550, 100, 15));
    }

    #[test]
    fn test_grid_layout() {
        let grid = BrickGrid::new();
        assert_eq!(grid.len(), 50);
        assert_eq!(grid.visible_count(), 50);

        assert_eq!(grid.get(0, 0).map(Brick::pos), Some(IVec2::new(80, 50)));
        assert_eq!(grid.get(0, 9).map(Brick::pos), Some(IVec2::new(710, 50)));
        assert_eq!(grid.get(4, 0).map(Brick::pos), Some(IVec2::new(80, 170)));
        assert_eq!(grid.get(2, 3).map(Brick::pos), Some(IVec2::new(290, 110)));
        assert!(grid.get(5, 0).is_none());
        assert!(grid.get(0, 10).is_none());
    }

    #[test]
    fn test_grid_is_row_major() {
        let grid = BrickGrid::new();
        let positions: Vec<IVec2> = grid.iter().map(Brick::pos).collect();
        assert_eq!(positions[1], IVec2::new(150, 50));
        assert_eq!(positions[10], IVec2::new(80, 80));
    }

    #[test]
    fn test_brick_stays_hidden() {
        let mut brick = Brick::new(IVec2::new(80, 50));
        assert!(brick.is_visible());
        brick.set_visible(false);
        assert!(!brick.is_visible());
        brick.set_visible(true);
        assert!(!brick.is_visible());
        assert_eq!(brick.bounds(), Rect::new(80, 50, 60, 20));
    }

    #[test]
    fn test_grid_hide() {
        let mut grid = BrickGrid::new();
        assert!(grid.hide(3));
        assert!(!grid.hide(3));
        assert!(!grid.hide(50));
        assert_eq!(grid.visible_count(), 49);
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new();
        assert_eq!(state.ball, Ball::spawn());
        assert_eq!(state.paddle.pos, IVec2::new(350, 550));
        assert!(!state.bricks.is_cleared());
        assert_eq!(state.time_ticks, 0);
        assert!(state.events.is_empty());
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_on_screen(offsets in prop::collection::vec(any::<i32>(), 0..64)) {
            let mut paddle = Paddle::default();
            for offset in offsets {
                paddle.shift(offset);
                prop_assert!((0..=PADDLE_MAX_X).contains(&paddle.pos.x));
            }
        }

        #[test]
        fn prop_brick_visibility_is_monotonic(toggles in prop::collection::vec(any::<bool>(), 1..32)) {
            let mut brick = Brick::new(IVec2::ZERO);
            let mut hidden = false;
            for visible in toggles {
                brick.set_visible(visible);
                hidden |= !visible;
                prop_assert_eq!(brick.is_visible(), !hidden);
            }
        }
    }
}
