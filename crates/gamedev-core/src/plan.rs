use crate::catalog::{self, TaskSpec};
use crate::sprint;
use crate::types::GameKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItem {
    pub title: String,
    pub description: String,
    /// 1 is the highest priority.
    pub priority: u8,
}

impl From<&TaskSpec> for TaskItem {
    fn from(spec: &TaskSpec) -> Self {
        Self {
            title: spec.title.to_string(),
            description: spec.description.to_string(),
            priority: spec.priority,
        }
    }
}

// ---------------------------------------------------------------------------
// Task plan
// ---------------------------------------------------------------------------

/// Ordered work plan for a game: the common tasks, then the catalog's
/// type-specific tasks. Position in this list decides sprint assignment.
pub fn generate_game_tasks(kind: &GameKind) -> Vec<TaskItem> {
    COMMON_TASKS
        .iter()
        .chain(catalog::type_specific_tasks(kind))
        .map(TaskItem::from)
        .collect()
}

/// A task paired with the sprint it will be bound to.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedTask {
    pub position: usize,
    pub sprint_index: Option<usize>,
    #[serde(flatten)]
    pub task: TaskItem,
}

/// The task plan with sprint buckets resolved, without touching the tracker.
pub fn plan_with_sprints(kind: &GameKind) -> Vec<PlannedTask> {
    generate_game_tasks(kind)
        .into_iter()
        .enumerate()
        .map(|(position, task)| PlannedTask {
            position,
            sprint_index: sprint::sprint_index(position, sprint::SPRINT_COUNT),
            task,
        })
        .collect()
}

pub const COMMON_TASKS: &[TaskSpec] = &[
    TaskSpec {
        title: "Project Setup & Configuration",
        description: r#"## Task: Setup development environment

### Description
Initialize the project with all required dependencies and configurations.

### Acceptance Criteria
- [ ] Vite project created with React and TypeScript
- [ ] All dependencies installed (@react-three/fiber, @react-three/drei, @react-three/rapier, etc.)
- [ ] TailwindCSS configured
- [ ] Basic folder structure created
- [ ] Git repository initialized
- [ ] Development server runs without errors

### Test Cases
1. Run `npm install` - should complete without errors
2. Run `npm run dev` - should start development server
3. Open browser - should see initial React app"#,
        priority: 1,
    },
    TaskSpec {
        title: "Create Start Screen",
        description: r#"## Task: Implement game start screen

### Description
Create an engaging start screen with game title and start button.

### Acceptance Criteria
- [ ] Attractive layout with game title
- [ ] "Start Game" button prominently displayed
- [ ] Responsive design for mobile and desktop
- [ ] Smooth transition to game screen
- [ ] Background animation or visual effects

### Test Cases
1. Load game - should show start screen first
2. Click "Start Game" - should transition to game
3. Resize window - layout should adapt
4. Test on mobile device - should be touch-friendly"#,
        priority: 2,
    },
    TaskSpec {
        title: "Implement Game Over Screen",
        description: r#"## Task: Create game over screen with confetti

### Description
Implement the game over screen with score display and celebration effects.

### Acceptance Criteria
- [ ] Display final score prominently
- [ ] Show "Play Again" button
- [ ] Trigger confetti explosion on game end
- [ ] Confetti uses 4 custom colors
- [ ] Smooth transition from game to game over screen

### Test Cases
1. Complete game - should show game over screen
2. Verify confetti appears with correct colors
3. Click "Play Again" - should restart game
4. Check confetti parameters match requirements"#,
        priority: 3,
    },
    TaskSpec {
        title: "Mobile Optimization",
        description: r#"## Task: Optimize game for mobile devices

### Description
Ensure the game runs smoothly on mobile devices with proper controls and performance.

### Acceptance Criteria
- [ ] Touch controls implemented and responsive
- [ ] Performance maintains 60 FPS on mid-range devices
- [ ] UI elements sized appropriately for touch
- [ ] Viewport locked to prevent zoom/scroll
- [ ] Orientation handling (portrait/landscape)

### Test Cases
1. Test on iPhone/Android - controls should work
2. Monitor FPS on mobile - should stay above 30 FPS minimum
3. Touch targets - minimum 44x44px
4. Pinch zoom - should be disabled
5. Screen rotation - game should adapt"#,
        priority: 2,
    },
    TaskSpec {
        title: "Performance Optimization",
        description: r#"## Task: Optimize game performance

### Description
Implement performance optimizations for smooth gameplay.

### Acceptance Criteria
- [ ] Implement object pooling for frequently created/destroyed objects
- [ ] Use LOD (Level of Detail) for complex meshes
- [ ] Optimize texture sizes and formats
- [ ] Implement frustum culling
- [ ] Monitor and optimize draw calls

### Test Cases
1. Profile with Chrome DevTools - identify bottlenecks
2. Draw calls should be under 100
3. Memory usage should be stable (no leaks)
4. FPS should remain above 30 on low-end devices"#,
        priority: 3,
    },
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GameType;

    #[test]
    fn common_tasks_come_first() {
        let tasks = generate_game_tasks(&GameKind::Known(GameType::Arcade));
        assert_eq!(tasks.len(), 7);
        let titles: Vec<&str> = tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Project Setup & Configuration",
                "Create Start Screen",
                "Implement Game Over Screen",
                "Mobile Optimization",
                "Performance Optimization",
                "Create Game Controls",
                "Implement Scoring System",
            ]
        );
    }

    #[test]
    fn priorities_follow_declaration() {
        let tasks = generate_game_tasks(&GameKind::Known(GameType::Puzzle));
        let priorities: Vec<u8> = tasks.iter().map(|t| t.priority).collect();
        assert_eq!(priorities, vec![1, 2, 3, 2, 3, 1, 2]);
    }

    #[test]
    fn unknown_kind_gets_only_common_tasks() {
        let tasks = generate_game_tasks(&GameKind::from("racing"));
        assert_eq!(tasks.len(), COMMON_TASKS.len());
        assert_eq!(tasks[4].title, "Performance Optimization");
    }

    #[test]
    fn underscored_type_name_is_not_a_known_type() {
        let tasks = generate_game_tasks(&GameKind::from("endless_runner"));
        assert_eq!(tasks.len(), COMMON_TASKS.len());
    }

    #[test]
    fn plan_with_sprints_buckets_by_position() {
        let plan = plan_with_sprints(&GameKind::Known(GameType::Platformer));
        let sprints: Vec<Option<usize>> = plan.iter().map(|p| p.sprint_index).collect();
        assert_eq!(
            sprints,
            vec![Some(0), Some(0), Some(0), Some(1), Some(1), Some(1), Some(2)]
        );
        assert_eq!(plan[5].task.title, "Create Player Character");
    }
}
