//! Crew members who walk to and man a craft's components.
//!
//! Crew are informational: they never gate thrust, firing or power.
//! Positions are ship-local so crew stay aboard while the craft moves.

use glam::DVec2;

use subspace_core::constants::{CREW_ARRIVE_DISTANCE, CREW_WALK_SPEED};
use subspace_core::enums::{ComponentKind, CrewState};
use subspace_core::grid::GridSpec;

use crate::component::Component;

/// Number of crew a component of this kind wants.
pub fn required_crew(kind: ComponentKind) -> u32 {
    match kind {
        ComponentKind::Power => 2,
        ComponentKind::Engine | ComponentKind::WeaponLaser | ComponentKind::WeaponCannon => 1,
        _ => 0,
    }
}

/// A single crew member.
#[derive(Debug, Clone, PartialEq)]
pub struct CrewMember {
    pub id: u32,
    /// Ship-local position.
    pub position: DVec2,
    pub state: CrewState,
    /// Cell the member has reached and is working at.
    pub assigned: Option<(i32, i32)>,
    /// Cell the member is walking toward.
    pub target: Option<(i32, i32)>,
    /// Seconds spent working at the assigned cell.
    pub work_progress: f64,
}

impl CrewMember {
    pub fn new(id: u32, position: DVec2) -> Self {
        Self {
            id,
            position,
            state: CrewState::Idle,
            assigned: None,
            target: None,
            work_progress: 0.0,
        }
    }

    /// Send this member toward `cell`.
    pub fn assign_to(&mut self, cell: (i32, i32)) {
        self.target = Some(cell);
        self.assigned = None;
        self.work_progress = 0.0;
        self.state = CrewState::Walking;
    }

    fn release(&mut self) {
        self.assigned = None;
        self.target = None;
        self.work_progress = 0.0;
        self.state = CrewState::Idle;
    }

    /// Whether this member is committed to `cell`, walking or working.
    fn serves(&self, cell: (i32, i32)) -> bool {
        self.assigned == Some(cell) || self.target == Some(cell)
    }

    fn is_free(&self) -> bool {
        self.assigned.is_none() && self.target.is_none()
    }

    fn update(&mut self, dt: f64, grid: &GridSpec) {
        if let Some(cell) = self.target {
            let destination = grid.cell_center(cell.0, cell.1);
            let offset = destination - self.position;
            let distance = offset.length();
            if distance < CREW_ARRIVE_DISTANCE {
                self.position = destination;
                self.assigned = Some(cell);
                self.target = None;
                self.state = CrewState::Working;
            } else {
                self.state = CrewState::Walking;
                let step = (CREW_WALK_SPEED * dt).min(distance);
                self.position += offset / distance * step;
            }
        } else if self.assigned.is_some() {
            self.state = CrewState::Working;
            self.work_progress += dt;
        } else {
            self.state = CrewState::Idle;
        }
    }
}

/// All crew aboard one craft.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CrewRoster {
    members: Vec<CrewMember>,
}

impl CrewRoster {
    /// `count` idle members standing at the ship origin.
    pub fn with_members(count: u32) -> Self {
        Self {
            members: (0..count).map(|id| CrewMember::new(id, DVec2::ZERO)).collect(),
        }
    }

    pub fn members(&self) -> &[CrewMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn idle_count(&self) -> usize {
        self.count_in(CrewState::Idle)
    }

    pub fn working_count(&self) -> usize {
        self.count_in(CrewState::Working)
    }

    /// Members walking toward or working at `cell`.
    pub fn serving(&self, cell: (i32, i32)) -> usize {
        self.members.iter().filter(|m| m.serves(cell)).count()
    }

    fn count_in(&self, state: CrewState) -> usize {
        self.members.iter().filter(|m| m.state == state).count()
    }

    /// Advance crew movement and hand out idle members.
    pub fn update(&mut self, dt: f64, components: &[Component], grid: &GridSpec) {
        self.release_lost(components);
        for member in &mut self.members {
            member.update(dt, grid);
        }
        self.assign_idle(components);
    }

    /// Free members whose cell no longer holds a crewed component.
    fn release_lost(&mut self, components: &[Component]) {
        let crewed = |cell: (i32, i32)| {
            components
                .iter()
                .any(|c| c.cell() == cell && required_crew(c.kind()) > 0)
        };
        for member in &mut self.members {
            let cell = member.target.or(member.assigned);
            if cell.is_some_and(|cell| !crewed(cell)) {
                member.release();
            }
        }
    }

    /// At most one new member per component per update, in component order.
    fn assign_idle(&mut self, components: &[Component]) {
        for component in components {
            let required = required_crew(component.kind()) as usize;
            if required == 0 {
                continue;
            }
            let cell = component.cell();
            if self.serving(cell) >= required {
                continue;
            }
            let Some(member) = self.members.iter_mut().find(|m| m.is_free()) else {
                return;
            };
            member.assign_to(cell);
        }
    }
}
