pub const GAME_STYLES: &str = "
                .game-card {
                    position: relative;
                    width: 90%;
                    max-width: 448px;
                    margin: 40px auto;
                    padding: 24px;
                    background: #333;
                    border: 1px solid #444;
                    border-radius: 8px;
                    box-shadow: 0 4px 6px rgba(0,0,0,0.3);
                    box-sizing: border-box;
                }

                .controls-area {
                    display: flex;
                    flex-direction: column;
                    gap: 8px;
                    margin-bottom: 16px;
                }

                .controls-area select {
                    padding: 8px;
                    background: #444;
                    color: #eee;
                    border: 1px solid #555;
                    border-radius: 6px;
                }

                .control-btn {
                    width: 100%;
                    padding: 12px;
                    font-size: 1.1em;
                    font-weight: bold;
                    color: white;
                    background: #2e7d32;
                    border: none;
                    border-radius: 8px;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }

                .control-btn:disabled {
                    background: #555;
                    cursor: not-allowed;
                }

                .progress {
                    width: 100%;
                    height: 8px;
                    margin: 16px 0 8px;
                    background: #222;
                    border-radius: 4px;
                    overflow: hidden;
                }

                .progress-fill {
                    height: 100%;
                    background: #a8e6cf;
                    transition: width 0.3s linear;
                }

                .stats-row {
                    display: flex;
                    justify-content: space-between;
                    margin: 4px 0;
                }

                .badge {
                    display: inline-block;
                    margin-top: 8px;
                    padding: 2px 10px;
                    background: #555;
                    border-radius: 12px;
                    font-size: 0.85em;
                }

                .arrow-board {
                    display: flex;
                    justify-content: center;
                    gap: 8px;
                    margin-top: 16px;
                }

                .arrow {
                    font-size: 2em;
                    transition: transform 0.3s;
                }

                .arrow.correct {
                    color: #4caf50;
                    transform: scale(1.25);
                }

                .arrow.wrong {
                    color: #f44336;
                    animation: shake 0.3s;
                }

                .swipe-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    pointer-events: none;
                }

                .swipe-pulse {
                    font-size: 6em;
                    color: #2196f3;
                    opacity: 0.75;
                    animation: pulse 0.5s ease-in-out infinite;
                }

                .alert {
                    margin-top: 16px;
                    padding: 12px 16px;
                    background: #2a2a2a;
                    border: 1px solid #555;
                    border-radius: 8px;
                }

                .alert-title {
                    font-weight: bold;
                    margin-bottom: 4px;
                }

                .high-scores h3 {
                    margin: 16px 0 8px;
                    color: #f0d9b5;
                }

                .high-scores li {
                    list-style: disc inside;
                    padding: 2px 0;
                }

                @keyframes shake {
                    0%, 100% { transform: translateX(0); }
                    25% { transform: translateX(-4px); }
                    75% { transform: translateX(4px); }
                }

                @keyframes pulse {
                    0%, 100% { opacity: 0.75; }
                    50% { opacity: 0.4; }
                }
";
