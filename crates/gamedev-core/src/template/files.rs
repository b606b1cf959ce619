//! Bodies of the generated project files.

use serde_json::{json, Value};

pub fn package_json(package_name: &str) -> Value {
    json!({
        "name": package_name,
        "private": true,
        "version": "0.0.1",
        "type": "module",
        "scripts": {
            "dev": "vite",
            "build": "tsc && vite build",
            "preview": "vite preview",
        },
        "dependencies": {
            "@react-three/drei": "^9.88.0",
            "@react-three/fiber": "^8.15.0",
            "@react-three/rapier": "^1.2.0",
            "clsx": "^2.0.0",
            "gsap": "^3.12.0",
            "react": "^18.2.0",
            "react-confetti-explosion": "^2.1.2",
            "react-dom": "^18.2.0",
            "three": "^0.158.0",
        },
        "devDependencies": {
            "@types/react": "^18.2.0",
            "@types/react-dom": "^18.2.0",
            "@types/three": "^0.158.0",
            "@vitejs/plugin-react": "^4.2.0",
            "autoprefixer": "^10.4.0",
            "postcss": "^8.4.0",
            "tailwindcss": "^3.3.0",
            "typescript": "^5.3.0",
            "vite": "^5.0.0",
        },
    })
}

pub fn tsconfig() -> Value {
    json!({
        "compilerOptions": {
            "target": "ES2020",
            "useDefineForClassFields": true,
            "lib": ["ES2020", "DOM", "DOM.Iterable"],
            "module": "ESNext",
            "skipLibCheck": true,
            "moduleResolution": "bundler",
            "allowImportingTsExtensions": true,
            "resolveJsonModule": true,
            "isolatedModules": true,
            "noEmit": true,
            "jsx": "react-jsx",
            "strict": true,
            "noUnusedLocals": true,
            "noUnusedParameters": true,
            "noFallthroughCasesInSwitch": true,
        },
        "include": ["src"],
        "references": [{ "path": "./tsconfig.node.json" }],
    })
}

pub fn tsconfig_node() -> Value {
    json!({
        "compilerOptions": {
            "composite": true,
            "skipLibCheck": true,
            "module": "ESNext",
            "moduleResolution": "bundler",
            "allowSyntheticDefaultImports": true,
        },
        "include": ["vite.config.ts"],
    })
}

pub const VITE_CONFIG: &str = r#"import { defineConfig } from 'vite'
import react from '@vitejs/plugin-react'

export default defineConfig({
  plugins: [react()],
  optimizeDeps: {
    exclude: ['@react-three/rapier'],
  },
})
"#;

pub const TAILWIND_CONFIG: &str = r#"/** @type {import('tailwindcss').Config} */
export default {
  content: [
    "./index.html",
    "./src/**/*.{js,ts,jsx,tsx}",
  ],
  theme: {
    extend: {},
  },
  plugins: [],
}
"#;

pub const POSTCSS_CONFIG: &str = r#"export default {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
}
"#;

pub fn index_html(game_name: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <link rel="icon" type="image/svg+xml" href="/vite.svg" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=no" />
    <title>{}</title>
  </head>
  <body>
    <div id="root"></div>
    <script type="module" src="/src/main.tsx"></script>
  </body>
</html>
"#,
        escape_html(game_name)
    )
}

pub const MAIN_TSX: &str = r#"import React from 'react'
import ReactDOM from 'react-dom/client'
import App from './App.tsx'
import './index.css'

ReactDOM.createRoot(document.getElementById('root')!).render(
  <React.StrictMode>
    <App />
  </React.StrictMode>,
)
"#;

pub const INDEX_CSS: &str = r#"@tailwind base;
@tailwind components;
@tailwind utilities;

body {
  margin: 0;
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto', 'Oxygen',
    'Ubuntu', 'Cantarell', 'Fira Sans', 'Droid Sans', 'Helvetica Neue',
    sans-serif;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
  overflow: hidden;
  touch-action: none;
}
"#;

pub const APP_TSX: &str = r#"import { useState } from 'react'
import { Canvas } from '@react-three/fiber'
import { Physics } from '@react-three/rapier'
import StartScreen from './screens/StartScreen'
import GameScreen from './screens/GameScreen'
import GameOverScreen from './screens/GameOverScreen'

type GameState = 'start' | 'playing' | 'gameOver'

function App() {
  const [gameState, setGameState] = useState<GameState>('start')
  const [score, setScore] = useState(0)

  const handleStartGame = () => {
    setScore(0)
    setGameState('playing')
  }

  const handleGameOver = (finalScore: number) => {
    setScore(finalScore)
    setGameState('gameOver')
  }

  return (
    <div className="w-screen h-screen relative">
      {gameState === 'start' && (
        <StartScreen onStartGame={handleStartGame} />
      )}

      {gameState === 'playing' && (
        <Canvas
          shadows
          camera={{ position: [0, 5, 10], fov: 50 }}
          className="w-full h-full"
        >
          <Physics>
            <GameScreen onGameOver={handleGameOver} />
          </Physics>
        </Canvas>
      )}

      {gameState === 'gameOver' && (
        <GameOverScreen score={score} onPlayAgain={handleStartGame} />
      )}
    </div>
  )
}

export default App
"#;

pub fn start_screen(game_name: &str) -> String {
    format!(
        r#"import React from 'react'

interface StartScreenProps {{
  onStartGame: () => void
}}

const StartScreen: React.FC<StartScreenProps> = ({{ onStartGame }}) => {{
  return (
    <div className="w-full h-full flex flex-col items-center justify-center bg-gradient-to-b from-blue-400 to-purple-600">
      <div className="text-center p-8">
        <h1 className="text-6xl font-bold text-white mb-8 animate-pulse">
          {}
        </h1>
        <p className="text-xl text-white mb-8">
          Get ready for an amazing adventure!
        </p>
        <button
          onClick={{onStartGame}}
          className="px-8 py-4 bg-yellow-400 text-gray-800 font-bold text-xl rounded-full
                     hover:bg-yellow-300 transform hover:scale-110 transition-all duration-200
                     shadow-lg active:scale-95"
        >
          Start Game
        </button>
      </div>
    </div>
  )
}}

export default StartScreen
"#,
        escape_jsx_text(game_name)
    )
}

/// Confetti stays up for 3.5 seconds.
pub const GAME_OVER_SCREEN: &str = r#"import React, { useEffect, useState } from 'react'
import ConfettiExplosion from 'react-confetti-explosion'

interface GameOverScreenProps {
  score: number
  onPlayAgain: () => void
}

const GameOverScreen: React.FC<GameOverScreenProps> = ({ score, onPlayAgain }) => {
  const [showConfetti, setShowConfetti] = useState(true)

  useEffect(() => {
    const timer = setTimeout(() => setShowConfetti(false), 3500)
    return () => clearTimeout(timer)
  }, [])

  return (
    <div className="w-full h-full flex flex-col items-center justify-center bg-gradient-to-b from-purple-600 to-pink-600">
      {showConfetti && (
        <ConfettiExplosion
          className="fixed bottom-[50vh] left-[50vw]"
          colors={['#FFD700', '#FF69B4', '#00CED1', '#32CD32']}
          particleCount={120}
          particleSize={20}
          duration={3500}
          zIndex={99999}
          force={2}
          height={'100vh'}
          width={1800}
        />
      )}

      <div className="text-center p-8 z-10">
        <h1 className="text-6xl font-bold text-white mb-4">
          Game Over!
        </h1>
        <div className="text-4xl text-yellow-300 mb-8">
          Score: {score}
        </div>
        <button
          onClick={onPlayAgain}
          className="px-8 py-4 bg-green-400 text-gray-800 font-bold text-xl rounded-full
                     hover:bg-green-300 transform hover:scale-110 transition-all duration-200
                     shadow-lg active:scale-95"
        >
          Play Again
        </button>
      </div>
    </div>
  )
}

export default GameOverScreen
"#;

pub fn component_stub(name: &str) -> String {
    format!(
        r#"import React from 'react'
import {{ RigidBody }} from '@react-three/rapier'

interface {name}Props {{
  position?: [number, number, number]
}}

const {name}: React.FC<{name}Props> = ({{ position = [0, 0, 0] }}) => {{
  return (
    <RigidBody position={{position}}>
      <mesh castShadow receiveShadow>
        <boxGeometry args={{[1, 1, 1]}} />
        <meshStandardMaterial color="hotpink" />
      </mesh>
    </RigidBody>
  )
}}

export default {name}
"#
    )
}

pub fn input_hook(name: &str) -> String {
    format!(
        r#"import {{ useEffect, useState }} from 'react'

type Keys = {{
  forward: boolean
  backward: boolean
  left: boolean
  right: boolean
  jump: boolean
}}

const KEY_MAP: Record<string, keyof Keys> = {{
  w: 'forward',
  arrowup: 'forward',
  s: 'backward',
  arrowdown: 'backward',
  a: 'left',
  arrowleft: 'left',
  d: 'right',
  arrowright: 'right',
  ' ': 'jump',
}}

export const {name} = () => {{
  const [keys, setKeys] = useState<Keys>({{
    forward: false,
    backward: false,
    left: false,
    right: false,
    jump: false,
  }})

  useEffect(() => {{
    const update = (pressed: boolean) => (e: KeyboardEvent) => {{
      const key = KEY_MAP[e.key.toLowerCase()]
      if (key) setKeys(prev => ({{ ...prev, [key]: pressed }}))
    }}
    const handleKeyDown = update(true)
    const handleKeyUp = update(false)

    window.addEventListener('keydown', handleKeyDown)
    window.addEventListener('keyup', handleKeyUp)

    return () => {{
      window.removeEventListener('keydown', handleKeyDown)
      window.removeEventListener('keyup', handleKeyUp)
    }}
  }}, [])

  return keys
}}
"#
    )
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

// JSX text treats braces as expressions.
fn escape_jsx_text(s: &str) -> String {
    escape_html(s).replace('{', "&#123;").replace('}', "&#125;")
}
