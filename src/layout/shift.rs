// Center-seeking shift.
//
// After the spiral search finds a free spot, the rectangle is pulled toward the
// cloud center one unit at a time. Every move is checked before it is taken, so
// the rectangle always rests at the last position known to be free.

use serde::{Deserialize, Serialize};

use crate::geometry::{PointI, RectI};

/// How a found rectangle is pulled toward the center.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftStrategy {
    /// Diagonal steps until one axis is aligned or blocked, then x alone, then y alone.
    #[default]
    DiagonalThenAxis,
    /// All the way along x first, then along y.
    AxisByAxis,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum ShiftPhase {
    Diagonal,
    AlongX,
    AlongY,
    Done,
}

/// Unit step (-1, 0 or 1) that moves `from` toward `to` without passing it.
fn unit_toward(from: i32, to: i32) -> i32 {
    (to - from).signum()
}

/// Pull `rect` toward `center` while `is_blocked` reports the moved rectangle as free.
///
/// Returns the final resting rectangle and the number of unit moves taken.
pub fn shift_toward_center<F>(
    rect: RectI,
    center: PointI,
    strategy: ShiftStrategy,
    is_blocked: F,
) -> (RectI, u32)
where
    F: Fn(&RectI) -> bool,
{
    let mut rect = rect;
    let mut moves = 0u32;
    let mut phase = match strategy {
        ShiftStrategy::DiagonalThenAxis => ShiftPhase::Diagonal,
        ShiftStrategy::AxisByAxis => ShiftPhase::AlongX,
    };

    while phase != ShiftPhase::Done {
        let c = rect.center();
        let dx = unit_toward(c.x, center.x);
        let dy = unit_toward(c.y, center.y);

        phase = match phase {
            ShiftPhase::Diagonal if dx == 0 => ShiftPhase::AlongY,
            ShiftPhase::Diagonal if dy == 0 => ShiftPhase::AlongX,
            ShiftPhase::Diagonal => match try_move(&rect, dx, dy, &is_blocked) {
                Some(moved) => {
                    rect = moved;
                    moves += 1;
                    ShiftPhase::Diagonal
                }
                None => ShiftPhase::AlongX,
            },
            ShiftPhase::AlongX if dx == 0 => ShiftPhase::AlongY,
            ShiftPhase::AlongX => match try_move(&rect, dx, 0, &is_blocked) {
                Some(moved) => {
                    rect = moved;
                    moves += 1;
                    ShiftPhase::AlongX
                }
                None => ShiftPhase::AlongY,
            },
            ShiftPhase::AlongY if dy == 0 => ShiftPhase::Done,
            ShiftPhase::AlongY => match try_move(&rect, 0, dy, &is_blocked) {
                Some(moved) => {
                    rect = moved;
                    moves += 1;
                    ShiftPhase::AlongY
                }
                None => ShiftPhase::Done,
            },
            ShiftPhase::Done => ShiftPhase::Done,
        };
    }

    (rect, moves)
}

fn try_move<F>(rect: &RectI, dx: i32, dy: i32, is_blocked: &F) -> Option<RectI>
where
    F: Fn(&RectI) -> bool,
{
    let moved = rect.translate(dx, dy);
    if is_blocked(&moved) {
        None
    } else {
        Some(moved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::SizeI;

    const ORIGIN: PointI = PointI { x: 0, y: 0 };

    fn shift(start: RectI, strategy: ShiftStrategy, obstacles: &[RectI]) -> (RectI, u32) {
        let blocked = |r: &RectI| r.overlaps_any(obstacles);
        shift_toward_center(start, ORIGIN, strategy, blocked)
    }

    #[test]
    fn test_free_space_reaches_center() {
        for strategy in [ShiftStrategy::DiagonalThenAxis, ShiftStrategy::AxisByAxis] {
            let start = RectI::from_center(PointI::new(40, -25), SizeI::new(10, 6));
            let (end, moves) = shift(start, strategy, &[]);
            assert_eq!(end.center(), ORIGIN);
            assert_eq!(end.size(), start.size());
            assert!(moves > 0);
        }
    }

    #[test]
    fn test_diagonal_uses_fewer_moves() {
        let start = RectI::new(45, 45, 10, 10);
        let (_, diagonal) = shift(start, ShiftStrategy::DiagonalThenAxis, &[]);
        let (_, axis) = shift(start, ShiftStrategy::AxisByAxis, &[]);
        assert_eq!(diagonal, 50);
        assert_eq!(axis, 100);
    }

    #[test]
    fn test_already_centered_does_not_move() {
        let start = RectI::new(-5, -5, 10, 10);
        let (end, moves) = shift(start, ShiftStrategy::DiagonalThenAxis, &[]);
        assert_eq!(end, start);
        assert_eq!(moves, 0);
    }

    #[test]
    fn test_fully_blocked_stays_put() {
        // Wedged into the corner of an L-shaped obstacle
        let obstacles = [RectI::new(0, 0, 45, 55), RectI::new(45, 0, 10, 45)];
        let start = RectI::new(45, 45, 10, 10);
        let (end, moves) = shift(start, ShiftStrategy::DiagonalThenAxis, &obstacles);
        assert_eq!(end, start);
        assert_eq!(moves, 0);
    }

    #[test]
    fn test_blocked_diagonal_slides_along_x() {
        let obstacles = [RectI::new(0, 0, 40, 40)];
        let start = RectI::new(45, 45, 10, 10);
        let (end, _) = shift(start, ShiftStrategy::DiagonalThenAxis, &obstacles);
        // Diagonal stops at the obstacle corner, x slides to the center, y is blocked
        assert_eq!(end, RectI::new(-5, 40, 10, 10));
        assert!(!end.overlaps_any(&obstacles));
    }

    #[test]
    fn test_strategies_can_differ() {
        let obstacles = [RectI::new(-20, 30, 40, 10)];
        let start = RectI::new(45, 45, 10, 10);

        let (diagonal, _) = shift(start, ShiftStrategy::DiagonalThenAxis, &obstacles);
        let (axis, _) = shift(start, ShiftStrategy::AxisByAxis, &obstacles);

        // The diagonal path passes beside the bar; the x-first path ends above it
        assert_eq!(diagonal, RectI::new(-5, -5, 10, 10));
        assert_eq!(axis, RectI::new(-5, 40, 10, 10));
    }

    #[test]
    fn test_never_overshoots() {
        let start = RectI::from_center(PointI::new(3, -100), SizeI::new(4, 4));
        let (end, _) = shift(start, ShiftStrategy::DiagonalThenAxis, &[]);
        assert_eq!(end.center(), ORIGIN);
    }
}
