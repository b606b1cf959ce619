use super::TaskSpec;

pub const PLATFORMER: &[TaskSpec] = &[
    TaskSpec {
        title: "Create Player Character",
        description: r#"## Task: Implement player character with controls

### Description
Create a 3D player character with movement controls.

### Acceptance Criteria
- [ ] 3D character model rendered
- [ ] Keyboard controls for desktop (WASD/Arrow keys)
- [ ] Touch controls for mobile
- [ ] Jump mechanics implemented
- [ ] Smooth character animations

### Test Cases
1. Press movement keys - character should move
2. Press jump - character should jump with physics
3. Test on mobile - touch controls should work
4. Character should collide with platforms"#,
        priority: 1,
    },
    TaskSpec {
        title: "Design Level System",
        description: r#"## Task: Create platform levels

### Description
Implement a level system with platforms and obstacles.

### Acceptance Criteria
- [ ] At least 3 different platform types
- [ ] Procedural or designed levels
- [ ] Collision detection working
- [ ] Camera follows player
- [ ] Level progression system

### Test Cases
1. Player lands on platforms correctly
2. Player falls when missing platforms
3. Camera tracks player movement
4. Level difficulty increases"#,
        priority: 2,
    },
];

pub const PUZZLE: &[TaskSpec] = &[
    TaskSpec {
        title: "Create Puzzle Grid System",
        description: r#"## Task: Implement puzzle grid mechanics

### Description
Create the core puzzle grid system with interactions.

### Acceptance Criteria
- [ ] Grid system implemented (e.g., 8x8)
- [ ] Pieces/tiles can be selected
- [ ] Valid moves highlighted
- [ ] Smooth animations for moves
- [ ] Touch and click support

### Test Cases
1. Click/tap piece - should select it
2. Make valid move - should animate smoothly
3. Make invalid move - should be prevented
4. Grid should be responsive to screen size"#,
        priority: 1,
    },
    TaskSpec {
        title: "Implement Puzzle Logic",
        description: r#"## Task: Add puzzle solving mechanics

### Description
Implement the core puzzle solving logic and win conditions.

### Acceptance Criteria
- [ ] Move validation implemented
- [ ] Score/combo system
- [ ] Win condition detection
- [ ] Difficulty progression
- [ ] Hint system (optional)

### Test Cases
1. Valid moves increase score
2. Invalid moves are blocked
3. Win condition triggers game over
4. Combos multiply score correctly"#,
        priority: 2,
    },
];

pub const ENDLESS_RUNNER: &[TaskSpec] = &[
    TaskSpec {
        title: "Create Runner Character",
        description: r#"## Task: Implement auto-running character

### Description
Create a character that automatically runs forward.

### Acceptance Criteria
- [ ] Character runs automatically
- [ ] Jump on tap/click/spacebar
- [ ] Double jump or slide mechanics
- [ ] Smooth animations
- [ ] Responsive controls

### Test Cases
1. Character starts running on game start
2. Tap/click triggers jump
3. Can't jump while already jumping (unless double jump)
4. Character speed increases over time"#,
        priority: 1,
    },
    TaskSpec {
        title: "Implement Obstacle System",
        description: r#"## Task: Create procedural obstacles

### Description
Generate obstacles and collectibles procedurally.

### Acceptance Criteria
- [ ] Random obstacle generation
- [ ] Different obstacle types
- [ ] Collectible items (coins, power-ups)
- [ ] Difficulty increases over time
- [ ] Fair spacing between obstacles

### Test Cases
1. Obstacles spawn continuously
2. Collision with obstacles ends game
3. Collectibles increase score
4. No impossible obstacle combinations"#,
        priority: 2,
    },
];

pub const PHYSICS_BASED: &[TaskSpec] = &[
    TaskSpec {
        title: "Setup Physics World",
        description: r#"## Task: Configure Rapier physics

### Description
Setup the physics world with proper parameters.

### Acceptance Criteria
- [ ] Rapier physics initialized
- [ ] Gravity configured correctly
- [ ] Physics debug mode available
- [ ] Performance optimized
- [ ] Collision groups setup

### Test Cases
1. Objects fall with realistic gravity
2. Collisions detected accurately
3. Physics runs at stable framerate
4. No physics glitches or explosions"#,
        priority: 1,
    },
    TaskSpec {
        title: "Create Interactive Objects",
        description: r#"## Task: Implement physics-based gameplay objects

### Description
Create objects that interact with physics realistically.

### Acceptance Criteria
- [ ] Various object shapes/sizes
- [ ] Different material properties
- [ ] Player can interact with objects
- [ ] Objects respond to forces
- [ ] Satisfying physics feedback

### Test Cases
1. Objects stack realistically
2. Throwing/launching objects works
3. Different materials behave differently
4. No objects fall through floor"#,
        priority: 2,
    },
];

pub const ARCADE: &[TaskSpec] = &[
    TaskSpec {
        title: "Create Game Controls",
        description: r#"## Task: Implement arcade-style controls

### Description
Create responsive controls for arcade gameplay.

### Acceptance Criteria
- [ ] Instant response to input
- [ ] Support keyboard and touch
- [ ] Visual feedback on actions
- [ ] Customizable control sensitivity
- [ ] No input lag

### Test Cases
1. Controls respond immediately
2. Multiple inputs handled correctly
3. Touch controls work on mobile
4. Visual feedback matches input"#,
        priority: 1,
    },
    TaskSpec {
        title: "Implement Scoring System",
        description: r#"## Task: Create engaging scoring mechanics

### Description
Implement score system with multipliers and combos.

### Acceptance Criteria
- [ ] Base scoring implemented
- [ ] Combo system for chains
- [ ] Score multipliers
- [ ] High score tracking
- [ ] Visual score feedback

### Test Cases
1. Actions increase score correctly
2. Combos multiply score
3. High score persists
4. Score displays update smoothly"#,
        priority: 2,
    },
];
