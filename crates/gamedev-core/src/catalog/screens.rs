//! Play-screen bodies (`src/screens/GameScreen.tsx`), one per game type.

pub const PLATFORMER: &str = r#"import React, { useState } from 'react'
import Player from '../components/Player'
import Platform from '../components/Platform'
import { useGameControls } from '../hooks/useGameControls'

interface GameScreenProps {
  onGameOver: (score: number) => void
}

const platforms: Array<{ position: [number, number, number]; size: [number, number, number] }> = [
  { position: [0, -2, 0], size: [10, 0.5, 2] },
  { position: [5, 0, 0], size: [3, 0.5, 2] },
  { position: [-5, 1, 0], size: [3, 0.5, 2] },
]

const GameScreen: React.FC<GameScreenProps> = ({ onGameOver }) => {
  const [score] = useState(0)
  const controls = useGameControls()

  return (
    <>
      <ambientLight intensity={0.5} />
      <directionalLight position={[10, 10, 5]} intensity={1} castShadow />

      <Player controls={controls} onFall={() => onGameOver(score)} />

      {platforms.map((platform, index) => (
        <Platform key={index} {...platform} />
      ))}

      <mesh position={[0, -10, 0]} rotation={[-Math.PI / 2, 0, 0]}>
        <planeGeometry args={[100, 100]} />
        <meshStandardMaterial color="red" />
      </mesh>
    </>
  )
}

export default GameScreen
"#;

pub const PUZZLE: &str = r#"import React from 'react'
import { OrbitControls } from '@react-three/drei'
import PuzzleGrid from '../components/PuzzleGrid'
import { usePuzzleLogic } from '../hooks/usePuzzleLogic'

interface GameScreenProps {
  onGameOver: (score: number) => void
}

const GameScreen: React.FC<GameScreenProps> = ({ onGameOver }) => {
  const { grid, score, makeMove, checkWinCondition } = usePuzzleLogic()

  const handleMove = (from: [number, number], to: [number, number]) => {
    makeMove(from, to)
    if (checkWinCondition()) {
      onGameOver(score)
    }
  }

  return (
    <>
      <ambientLight intensity={0.6} />
      <directionalLight position={[10, 10, 5]} intensity={0.8} />
      <OrbitControls enablePan={false} />

      <PuzzleGrid grid={grid} onMove={handleMove} />
    </>
  )
}

export default GameScreen
"#;

pub const ENDLESS_RUNNER: &str = r##"import React, { useState, useRef } from 'react'
import { useFrame } from '@react-three/fiber'
import Runner from '../components/Runner'
import Obstacle from '../components/Obstacle'
import { useRunnerControls } from '../hooks/useRunnerControls'

interface GameScreenProps {
  onGameOver: (score: number) => void
}

type Vec3 = [number, number, number]

const GameScreen: React.FC<GameScreenProps> = ({ onGameOver }) => {
  const [score, setScore] = useState(0)
  const [obstacles, setObstacles] = useState<Array<{ id: number; position: Vec3 }>>([])
  const controls = useRunnerControls()
  const speed = useRef(5)

  useFrame((_, delta) => {
    setScore(prev => prev + delta * 10)
    speed.current = Math.min(speed.current + delta * 0.1, 15)

    if (Math.random() < 0.02) {
      setObstacles(prev => [...prev, { id: Date.now(), position: [Math.random() * 4 - 2, 0.5, 20] }])
    }

    setObstacles(prev =>
      prev
        .map(obs => ({
          ...obs,
          position: [obs.position[0], obs.position[1], obs.position[2] - speed.current * delta] as Vec3,
        }))
        .filter(obs => obs.position[2] > -5)
    )
  })

  return (
    <>
      <ambientLight intensity={0.5} />
      <directionalLight position={[10, 10, 5]} intensity={1} castShadow />

      <Runner controls={controls} onCollision={() => onGameOver(Math.floor(score))} />

      {obstacles.map(obstacle => (
        <Obstacle key={obstacle.id} position={obstacle.position} />
      ))}

      <mesh position={[0, -0.5, 0]} rotation={[-Math.PI / 2, 0, 0]}>
        <planeGeometry args={[10, 100]} />
        <meshStandardMaterial color="#8B4513" />
      </mesh>
    </>
  )
}

export default GameScreen
"##;

pub const PHYSICS_BASED: &str = r##"import React, { useState } from 'react'
import { OrbitControls } from '@react-three/drei'
import PhysicsObject from '../components/PhysicsObject'
import { usePhysicsInteraction } from '../hooks/usePhysicsInteraction'

interface GameScreenProps {
  onGameOver: (score: number) => void
}

const GameScreen: React.FC<GameScreenProps> = ({ onGameOver }) => {
  const [score, setScore] = useState(0)
  const { objects } = usePhysicsInteraction()

  return (
    <>
      <ambientLight intensity={0.5} />
      <directionalLight position={[10, 10, 5]} intensity={1} castShadow />
      <OrbitControls />

      {objects.map(obj => (
        <PhysicsObject
          key={obj.id}
          {...obj}
          onScore={(points: number) => setScore(prev => prev + points)}
          onFinish={() => onGameOver(score)}
        />
      ))}

      <mesh position={[0, -5, 0]} rotation={[-Math.PI / 2, 0, 0]}>
        <planeGeometry args={[50, 50]} />
        <meshStandardMaterial color="#228B22" />
      </mesh>
    </>
  )
}

export default GameScreen
"##;

pub const ARCADE: &str = r#"import React, { useState } from 'react'
import { useFrame } from '@react-three/fiber'
import PlayerShip from '../components/PlayerShip'
import Enemy from '../components/Enemy'
import Projectile from '../components/Projectile'
import { useArcadeControls } from '../hooks/useArcadeControls'

interface GameScreenProps {
  onGameOver: (score: number) => void
}

type Vec3 = [number, number, number]

const GameScreen: React.FC<GameScreenProps> = ({ onGameOver }) => {
  const [score] = useState(0)
  const [enemies, setEnemies] = useState<Array<{ id: number; position: Vec3 }>>([])
  const [projectiles, setProjectiles] = useState<Array<{ id: number; position: Vec3 }>>([])
  const controls = useArcadeControls()

  useFrame((_, delta) => {
    if (Math.random() < 0.02) {
      setEnemies(prev => [...prev, { id: Date.now(), position: [Math.random() * 10 - 5, 5, 0] }])
    }

    setEnemies(prev => {
      const moved = prev.map(enemy => ({
        ...enemy,
        position: [enemy.position[0], enemy.position[1] - delta * 2, enemy.position[2]] as Vec3,
      }))
      if (moved.some(enemy => enemy.position[1] <= -5)) {
        onGameOver(score)
      }
      return moved.filter(enemy => enemy.position[1] > -5)
    })
  })

  return (
    <>
      <ambientLight intensity={0.5} />
      <directionalLight position={[10, 10, 5]} intensity={1} />

      <PlayerShip
        controls={controls}
        onShoot={(position: Vec3) => {
          setProjectiles(prev => [...prev, { id: Date.now(), position }])
        }}
      />

      {enemies.map(enemy => (
        <Enemy key={enemy.id} position={enemy.position} />
      ))}

      {projectiles.map(projectile => (
        <Projectile key={projectile.id} position={projectile.position} />
      ))}
    </>
  )
}

export default GameScreen
"#;
