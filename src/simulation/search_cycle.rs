// src/simulation/search_cycle.rs

use std::thread;
use std::time::Duration;

use crate::math::{MathError, Vector3};
use crate::models::{ModelError, Radar, WorldMap};

/// 探索サイクルの設定
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSettings {
    pub sweep_count: usize, // エピソード数
    pub hit_epsilon: f64,   // ヒット判定距離
}

impl Default for SearchSettings {
    fn default() -> Self {
        SearchSettings {
            sweep_count: 1,
            hit_epsilon: 0.5,
        }
    }
}

/// 1エピソードの終了理由
#[derive(Debug, Clone, PartialEq)]
pub enum EpisodeResult {
    /// 目標に命中した
    Hit {
        target_index: usize,
        target_id: String,
        position: Vector3,
    },
    /// 信号が領域外へ出た
    Miss { position: Vector3 },
    /// ステップ上限に達した（通常は発生しない）
    Timeout { position: Vector3 },
}

impl EpisodeResult {
    pub fn label(&self) -> &'static str {
        match self {
            EpisodeResult::Hit { .. } => "hit",
            EpisodeResult::Miss { .. } => "miss",
            EpisodeResult::Timeout { .. } => "timeout",
        }
    }

    /// エピソード終了時の信号位置
    pub fn position(&self) -> Vector3 {
        match self {
            EpisodeResult::Hit { position, .. }
            | EpisodeResult::Miss { position }
            | EpisodeResult::Timeout { position } => *position,
        }
    }
}

/// 1エピソードの結果
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeOutcome {
    pub episode: usize,
    pub direction: Vector3, // 放射時のパルス方向
    pub steps: usize,       // 終了したティック（1始まり）
    pub max_steps: usize,
    pub result: EpisodeResult,
}

/// ティックごとに呼ばれる情報
#[derive(Debug, Clone, PartialEq)]
pub struct TickInfo {
    pub episode: usize,
    pub step: usize,
    pub signal_position: Vector3,
}

/// ティックごとのフック（表示や実時間での間引きに使う）
pub trait TickObserver {
    fn on_tick(&mut self, tick: &TickInfo);
}

/// 何もしないフック
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPacing;

impl TickObserver for NoPacing {
    fn on_tick(&mut self, _tick: &TickInfo) {}
}

/// ティックごとに一定時間待つフック
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    pub delay: Duration,
}

impl FixedDelay {
    pub fn new(delay: Duration) -> Self {
        FixedDelay { delay }
    }
}

impl TickObserver for FixedDelay {
    fn on_tick(&mut self, _tick: &TickInfo) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

/// 結果の集計
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchSummary {
    pub hits: usize,
    pub misses: usize,
    pub timeouts: usize,
}

impl SearchSummary {
    pub fn from_outcomes(outcomes: &[EpisodeOutcome]) -> Self {
        outcomes
            .iter()
            .fold(SearchSummary::default(), |mut summary, outcome| {
                match outcome.result {
                    EpisodeResult::Hit { .. } => summary.hits += 1,
                    EpisodeResult::Miss { .. } => summary.misses += 1,
                    EpisodeResult::Timeout { .. } => summary.timeouts += 1,
                }
                summary
            })
    }
}

/// 1エピソードで許容するステップ数の上限
pub const MAX_EPISODE_STEPS: usize = 10_000_000;

/// 信号が領域を横断するのに十分なステップ数
///
/// # 引数
/// - `radius`: マップ半径
/// - `signal_speed`: 信号の1ティックあたりの進行距離
pub fn max_steps(radius: f64, signal_speed: f64) -> usize {
    ((radius / signal_speed).ceil() as usize).saturating_add(1)
}

/// レーダの走査とパルスの伝搬を繰り返す探索サイクル
///
/// `run` は自身を消費する。再実行には新しいインスタンスが必要。
#[derive(Debug)]
pub struct SearchCycle {
    radar: Radar,
    world: WorldMap,
    settings: SearchSettings,
}

impl SearchCycle {
    /// # 戻り値
    /// - ヒット判定距離が0以上の有限値でない場合は`ModelError::InvalidHitEpsilon`
    /// - パルス速度が遅すぎて1エピソードのステップ数が`MAX_EPISODE_STEPS`を超える場合は`ModelError::InvalidSpeed`
    pub fn new(
        radar: Radar,
        world: WorldMap,
        settings: SearchSettings,
    ) -> Result<SearchCycle, ModelError> {
        if !settings.hit_epsilon.is_finite() || settings.hit_epsilon < 0.0 {
            return Err(ModelError::InvalidHitEpsilon(settings.hit_epsilon));
        }
        if max_steps(world.radius(), radar.speed) > MAX_EPISODE_STEPS {
            return Err(ModelError::InvalidSpeed(radar.speed));
        }
        Ok(SearchCycle {
            radar,
            world,
            settings,
        })
    }

    pub fn radar(&self) -> &Radar {
        &self.radar
    }

    pub fn world(&self) -> &WorldMap {
        &self.world
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// 待ち時間なしで全エピソードを実行する
    pub fn run(self) -> Result<Vec<EpisodeOutcome>, MathError> {
        self.run_with_observer(&mut NoPacing)
    }

    /// フックを指定して全エピソードを実行する
    ///
    /// # 戻り値
    /// - 放射順に並んだエピソード結果
    /// - パルス方向がゼロベクトルの場合は`MathError::DegenerateVector`
    pub fn run_with_observer(
        mut self,
        observer: &mut dyn TickObserver,
    ) -> Result<Vec<EpisodeOutcome>, MathError> {
        log::info!(
            "探索開始: エピソード数={}, 目標数={}, 半径={}",
            self.settings.sweep_count,
            self.world.targets().len(),
            self.world.radius()
        );

        let mut outcomes = Vec::new();
        for episode in 0..self.settings.sweep_count {
            let outcome = self.run_episode(episode, observer)?;
            log::debug!(
                "エピソード {}: {} (方向 {}, {} ステップ)",
                episode,
                outcome.result.label(),
                outcome.direction,
                outcome.steps
            );
            outcomes.push(outcome);
            self.radar.rotate();
        }

        let summary = SearchSummary::from_outcomes(&outcomes);
        log::info!(
            "探索終了: 命中={}, 失探={}, タイムアウト={}",
            summary.hits,
            summary.misses,
            summary.timeouts
        );
        Ok(outcomes)
    }

    fn run_episode(
        &mut self,
        episode: usize,
        observer: &mut dyn TickObserver,
    ) -> Result<EpisodeOutcome, MathError> {
        let mut signal = self.radar.emit()?;
        let direction = signal.direction;
        let max_steps = max_steps(self.world.radius(), signal.speed);

        for step in 1..=max_steps {
            // 目標の移動は命中判定より先
            signal.step();
            self.world.advance_all(1.0);
            log::trace!("エピソード {} ステップ {}: 信号位置 {}", episode, step, signal.position);
            observer.on_tick(&TickInfo {
                episode,
                step,
                signal_position: signal.position,
            });

            if let Some(target_index) = self.find_hit(signal.position) {
                let target_id = self.world.targets()[target_index].id.clone();
                return Ok(EpisodeOutcome {
                    episode,
                    direction,
                    steps: step,
                    max_steps,
                    result: EpisodeResult::Hit {
                        target_index,
                        target_id,
                        position: signal.position,
                    },
                });
            }

            if !self.world.contains(signal.position) {
                return Ok(EpisodeOutcome {
                    episode,
                    direction,
                    steps: step,
                    max_steps,
                    result: EpisodeResult::Miss {
                        position: signal.position,
                    },
                });
            }
        }

        log::warn!(
            "エピソード {}: {} ステップ以内に信号が領域外へ出ませんでした (位置 {}, 速度 {})",
            episode,
            max_steps,
            signal.position,
            signal.speed
        );
        Ok(EpisodeOutcome {
            episode,
            direction,
            steps: max_steps,
            max_steps,
            result: EpisodeResult::Timeout {
                position: signal.position,
            },
        })
    }

    /// ヒット判定距離内にある目標のうち最小のインデックス
    fn find_hit(&self, position: Vector3) -> Option<usize> {
        self.world
            .targets()
            .iter()
            .position(|target| position.distance_to(target.position) <= self.settings.hit_epsilon)
    }
}
