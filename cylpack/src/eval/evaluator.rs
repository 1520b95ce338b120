use crate::entities::{Instance, Layout};
use crate::eval::{place, repair};
use crate::geometry::geo_traits::CollidesWith;

/// Fitness returned for orders that cannot be placed at all, distinguishing
/// "no layout possible" from "layout possible but constraint-violating".
pub const PLACEMENT_PENALTY: u32 = 10_000;

/// How much of a layout the evaluator re-verifies.
#[derive(Clone, Debug, PartialEq, Eq, Copy)]
pub enum Strictness {
    /// Check boundary containment and pairwise overlaps before the balance zone.
    Full,
    /// Check only the balance zone. Sound solely for layouts fresh out of
    /// [`place`] and [`repair`]: placement guarantees overlap and boundary
    /// feasibility, and repair is a rigid translation which cannot break it.
    BalanceOnly,
}

/// Scores placement orders and layouts against the loading constraints.
/// Fitness is a non-negative integer, lower is better, 0 means feasible.
#[derive(Clone, Debug)]
pub struct Evaluator<'a> {
    pub instance: &'a Instance,
    pub strictness: Strictness,
    /// Also reject layouts whose total weight exceeds the container rating.
    /// Off by default: the reference constraint set does not include it.
    pub check_max_weight: bool,
}

impl<'a> Evaluator<'a> {
    pub fn new(instance: &'a Instance, strictness: Strictness) -> Self {
        Self {
            instance,
            strictness,
            check_max_weight: false,
        }
    }

    /// Places `order`, repairs the balance and scores the resulting layout.
    /// Orders without any collision-free placement score [`PLACEMENT_PENALTY`].
    pub fn eval_order(&self, order: &[usize]) -> u32 {
        match place(order, &self.instance.cylinders, &self.instance.container) {
            None => PLACEMENT_PENALTY,
            Some(mut layout) => {
                repair(&mut layout);
                self.eval_layout(&layout)
            }
        }
    }

    /// Scores an already repaired layout: 1 on the first violated constraint,
    /// 0 if every checked constraint holds.
    pub fn eval_layout(&self, layout: &Layout) -> u32 {
        if self.strictness == Strictness::Full {
            let bbox = layout.container.bbox();
            for (i, p) in layout.placed.iter().enumerate() {
                if !bbox.contains_circle(&p.circle()) {
                    return 1;
                }
                for q in &layout.placed[i + 1..] {
                    if p.circle().collides_with(&q.circle()) {
                        return 1;
                    }
                }
            }
        }

        if self.check_max_weight {
            let total_weight = layout.placed.iter().map(|p| p.weight).sum::<f32>();
            if total_weight > layout.container.max_weight {
                return 1;
            }
        }

        let balance_zone = layout.container.balance_zone();
        if !balance_zone.collides_with(&layout.centroid()) {
            return 1;
        }

        0
    }
}
