use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

use super::ease::Ease;
use super::props::{PointerEvents, Prop, Props, Style};

pub type Frame<T> = HashMap<T, Style>;

/// Source of uniform numbers in `[0, 1)`.
pub type Random = Box<dyn FnMut() -> f64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Spacing {
    Each(f64),
    /// Total time split across the whole group.
    Amount(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaggerFrom {
    Start,
    End,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    pub spacing: Spacing,
    pub from: StaggerFrom,
}

impl Stagger {
    pub fn each(seconds: f64) -> Self {
        Self { spacing: Spacing::Each(seconds), from: StaggerFrom::Start }
    }

    pub fn amount(seconds: f64) -> Self {
        Self { spacing: Spacing::Amount(seconds), from: StaggerFrom::Start }
    }

    pub fn from(mut self, from: StaggerFrom) -> Self {
        self.from = from;
        self
    }

    /// Start offset for each of `count` elements.
    pub fn offsets(&self, count: usize, random: &mut dyn FnMut() -> f64) -> Vec<f64> {
        let step = match self.spacing {
            Spacing::Each(seconds) => seconds,
            Spacing::Amount(total) if count > 1 => total / (count - 1) as f64,
            Spacing::Amount(_) => 0.0,
        };
        let ranks: Vec<usize> = match self.from {
            StaggerFrom::Start => (0..count).collect(),
            StaggerFrom::End => (0..count).rev().collect(),
            StaggerFrom::Random => {
                let mut ranks: Vec<usize> = (0..count).collect();
                for i in (1..count).rev() {
                    let j = ((random() * (i + 1) as f64) as usize).min(i);
                    ranks.swap(i, j);
                }
                ranks
            }
        };
        ranks.into_iter().map(|rank| rank as f64 * step).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    pub duration: f64,
    /// Extra random duration per element, up to this many seconds.
    pub jitter: f64,
    pub ease: Ease,
    pub stagger: Option<Stagger>,
}

impl TweenSpec {
    pub fn new(duration: f64) -> Self {
        Self { duration, jitter: 0.0, ease: Ease::default(), stagger: None }
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn stagger(mut self, stagger: Stagger) -> Self {
        self.stagger = Some(stagger);
        self
    }

    pub fn jitter(mut self, seconds: f64) -> Self {
        self.jitter = seconds;
        self
    }
}

/// Where an insertion lands on the timeline.
#[derive(Debug, Clone, PartialEq)]
pub enum Position {
    End,
    /// Offset from the start of the previous insertion (`"<2"`).
    AfterPreviousStart(f64),
    /// Offset from a label (`"label+=0.5"`). Missing labels are created at the end.
    Label(String, f64),
}

impl Position {
    pub fn label(name: &str) -> Self {
        Position::Label(name.to_string(), 0.0)
    }

    pub fn label_offset(name: &str, offset: f64) -> Self {
        Position::Label(name.to_string(), offset)
    }
}

#[derive(Debug, Clone)]
struct Segment<K, V> {
    key: K,
    start: f64,
    duration: f64,
    from: V,
    to: V,
    ease: Ease,
    immediate: bool,
}

impl<K, V> Segment<K, V> {
    fn progress(&self, time: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((time - self.start) / self.duration).clamp(0.0, 1.0)
    }
}

impl<K> Segment<K, f64> {
    fn value_at(&self, time: f64) -> f64 {
        self.from + (self.to - self.from) * self.ease.apply(self.progress(time))
    }
}

impl<K> Segment<K, PointerEvents> {
    fn value_at(&self, time: f64) -> PointerEvents {
        if self.progress(time) > 0.0 {
            self.to
        } else {
            self.from
        }
    }
}

enum Winner<'a, K, V> {
    Started(&'a Segment<K, V>),
    Pending(&'a Segment<K, V>),
}

/// Pick the segment that owns a property at `time`: the latest one already
/// started, or failing that the earliest pending one.
fn pick<K: Copy + Eq + Hash, V>(
    segments: &[Segment<K, V>],
    time: f64,
) -> HashMap<K, Winner<'_, K, V>> {
    let mut owners = HashMap::new();
    for segment in segments {
        let started = segment.start <= time;
        match owners.entry(segment.key) {
            Entry::Vacant(v) => {
                v.insert(if started { Winner::Started(segment) } else { Winner::Pending(segment) });
            }
            Entry::Occupied(mut o) => {
                let replace = match o.get() {
                    Winner::Started(current) => started && current.start <= segment.start,
                    Winner::Pending(current) => started || segment.start < current.start,
                };
                if replace {
                    o.insert(if started { Winner::Started(segment) } else { Winner::Pending(segment) });
                }
            }
        }
    }
    owners
}

/// An authored sequence of tweens that can be evaluated at any time.
pub struct Timeline<T> {
    base: HashMap<T, Style>,
    tracks: Vec<Segment<(T, Prop), f64>>,
    switches: Vec<Segment<T, PointerEvents>>,
    labels: HashMap<String, f64>,
    settled: HashMap<(T, Prop), f64>,
    settled_pointer: HashMap<T, PointerEvents>,
    duration: f64,
    last_start: f64,
    random: Random,
}

impl<T: Copy + Eq + Hash> Timeline<T> {
    pub fn new(random: Random) -> Self {
        Self {
            base: HashMap::new(),
            tracks: Vec::new(),
            switches: Vec::new(),
            labels: HashMap::new(),
            settled: HashMap::new(),
            settled_pointer: HashMap::new(),
            duration: 0.0,
            last_start: 0.0,
            random,
        }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn label_time(&self, name: &str) -> Option<f64> {
        self.labels.get(name).copied()
    }

    pub fn add_label(&mut self, name: &str) {
        self.labels.insert(name.to_string(), self.duration);
    }

    pub fn set_base(&mut self, target: T, props: Props) {
        self.base.entry(target).or_default().apply(&props);
    }

    /// Empty tween that just holds the current state.
    pub fn pause(&mut self, seconds: f64) {
        self.last_start = self.duration;
        self.duration += seconds.max(0.0);
    }

    pub fn to<F>(&mut self, targets: &[T], spec: TweenSpec, position: Position, mut vars: F)
    where
        F: FnMut(usize, &mut dyn FnMut() -> f64) -> Props,
    {
        let to: Vec<Props> = (0..targets.len()).map(|i| vars(i, &mut *self.random)).collect();
        self.insert(targets, None, to, spec, position);
    }

    pub fn from_to<F, G>(
        &mut self,
        targets: &[T],
        spec: TweenSpec,
        position: Position,
        mut from: F,
        mut to: G,
    ) where
        F: FnMut(usize, &mut dyn FnMut() -> f64) -> Props,
        G: FnMut(usize, &mut dyn FnMut() -> f64) -> Props,
    {
        let mut froms = Vec::with_capacity(targets.len());
        let mut tos = Vec::with_capacity(targets.len());
        for i in 0..targets.len() {
            froms.push(from(i, &mut *self.random));
            tos.push(to(i, &mut *self.random));
        }
        self.insert(targets, Some(froms), tos, spec, position);
    }

    fn resolve(&mut self, position: Position) -> f64 {
        let time = match position {
            Position::End => self.duration,
            Position::AfterPreviousStart(offset) => self.last_start + offset,
            Position::Label(name, offset) => {
                let end = self.duration;
                *self.labels.entry(name).or_insert(end) + offset
            }
        };
        time.max(0.0)
    }

    fn settled_value(&self, target: T, prop: Prop) -> f64 {
        self.settled
            .get(&(target, prop))
            .copied()
            .unwrap_or_else(|| self.base.get(&target).copied().unwrap_or_default().get(prop))
    }

    fn settled_pointer(&self, target: T) -> PointerEvents {
        self.settled_pointer
            .get(&target)
            .copied()
            .or_else(|| self.base.get(&target).and_then(|style| style.pointer_events))
            .unwrap_or_default()
    }

    fn insert(
        &mut self,
        targets: &[T],
        from: Option<Vec<Props>>,
        to: Vec<Props>,
        spec: TweenSpec,
        position: Position,
    ) {
        let start = self.resolve(position);
        let offsets = match spec.stagger {
            Some(stagger) => stagger.offsets(targets.len(), &mut *self.random),
            None => vec![0.0; targets.len()],
        };

        for (i, &target) in targets.iter().enumerate() {
            let begin = start + offsets[i];
            let duration = if spec.jitter > 0.0 {
                spec.duration + spec.jitter * (self.random)()
            } else {
                spec.duration
            };
            let from_props = from.as_ref().map(|f| &f[i]);

            for (prop, end) in to[i].values() {
                let explicit = from_props.and_then(|f| f.get(prop));
                let track = Segment {
                    key: (target, prop),
                    start: begin,
                    duration,
                    from: explicit.unwrap_or_else(|| self.settled_value(target, prop)),
                    to: end,
                    ease: spec.ease,
                    immediate: explicit.is_some(),
                };
                self.tracks.push(track);
                self.settled.insert((target, prop), end);
            }

            if let Some(end) = to[i].pointer() {
                let explicit = from_props.and_then(|f| f.pointer());
                let switch = Segment {
                    key: target,
                    start: begin,
                    duration,
                    from: explicit.unwrap_or_else(|| self.settled_pointer(target)),
                    to: end,
                    ease: spec.ease,
                    immediate: explicit.is_some(),
                };
                self.switches.push(switch);
                self.settled_pointer.insert(target, end);
            }

            self.duration = self.duration.max(begin + duration);
        }
        self.last_start = start;
    }

    /// Resolved style of every known target at `time` seconds.
    pub fn render(&self, time: f64) -> Frame<T> {
        let mut frame: Frame<T> = self.base.clone();
        for track in &self.tracks {
            let style = frame.entry(track.key.0).or_default();
            if track.key.1 == Prop::Brightness {
                style.brightness.get_or_insert(1.0);
            }
        }

        for ((target, prop), owner) in pick(&self.tracks, time) {
            let value = match owner {
                Winner::Started(segment) => segment.value_at(time),
                Winner::Pending(segment) if segment.immediate => segment.from,
                Winner::Pending(_) => continue,
            };
            if let Some(style) = frame.get_mut(&target) {
                style.set(prop, value);
            }
        }

        for (target, owner) in pick(&self.switches, time) {
            let value = match owner {
                Winner::Started(segment) => segment.value_at(time),
                Winner::Pending(segment) if segment.immediate => segment.from,
                Winner::Pending(_) => continue,
            };
            if let Some(style) = frame.get_mut(&target) {
                style.pointer_events = Some(value);
            }
        }
        frame
    }
}
