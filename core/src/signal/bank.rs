use crate::prelude::Sample;
use crate::signal::channel::Channel;

/// Ordered, immutable set of channels evaluated together each tick.
///
/// The downstream grapher matches lines by label, so the label set and the
/// emission order never change across ticks.
#[derive(Debug, Clone)]
pub struct ChannelBank {
    channels: Vec<Channel>,
}

impl ChannelBank {
    pub fn new(channels: Vec<Channel>) -> Self {
        Self { channels }
    }

    /// The ten-channel bank the downstream grapher expects, in wire order:
    /// six sinusoids driven by the counter plus four constant threshold
    /// lines.
    pub fn standard() -> Self {
        Self::new(vec![
            Channel::sine("line1", 1.0, 0.0, 0.09, 18.0),
            Channel::sine("input-a", 1.0, 0.0, 0.09, 7.0),
            Channel::sine("metric-b", 1.0, 0.098, 0.09, 25.0),
            Channel::sine("input-g2", 2.0, 0.0, 0.09, 3.0),
            Channel::sine("graph-line", 3.0, 0.0, 0.09, 5.0),
            Channel::sine("input-g9", 5.0, 0.0, 0.09, 5.0),
            Channel::constant("yconst-1", 10.0),
            Channel::constant("yconst-2", 20.0),
            Channel::constant("yconst-3", 23.0),
            Channel::constant("yconst-4", 0.0),
        ])
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.channels.iter().map(|c| c.label()).collect()
    }

    /// Evaluates every channel at the given counter position, in order.
    pub fn sample(&self, counter: f64) -> Vec<Sample> {
        self.channels.iter().map(|c| c.sample(counter)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_bank_has_fixed_label_order() {
        let bank = ChannelBank::standard();
        assert_eq!(
            bank.labels(),
            vec![
                "line1",
                "input-a",
                "metric-b",
                "input-g2",
                "graph-line",
                "input-g9",
                "yconst-1",
                "yconst-2",
                "yconst-3",
                "yconst-4",
            ]
        );
    }

    #[test]
    fn standard_bank_emits_ten_samples_per_tick() {
        let bank = ChannelBank::standard();
        assert_eq!(bank.sample(3.0).len(), 10);
        assert_eq!(bank.sample(4.5).len(), 10);
    }

    #[test]
    fn constant_channels_hold_their_values() {
        let bank = ChannelBank::standard();
        for counter in [3.0, 3.5, 100.0] {
            let samples = bank.sample(counter);
            assert_eq!(samples[6].value, 10.0);
            assert_eq!(samples[7].value, 20.0);
            assert_eq!(samples[8].value, 23.0);
            assert_eq!(samples[9].value, 0.0);
        }
    }

    #[test]
    fn line1_and_input_a_share_phase() {
        // Same sine argument, amplitudes 18 vs 7.
        let bank = ChannelBank::standard();
        for counter in [3.0, 3.317, 4.2] {
            let samples = bank.sample(counter);
            let (line1, input_a) = (samples[0].value, samples[1].value);
            if input_a.abs() > 1e-9 {
                assert!((line1 / input_a - 18.0 / 7.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn first_tick_matches_reference_batch() {
        let bank = ChannelBank::standard();
        let samples = bank.sample(3.0);
        let expected = [
            16.92953237931774,
            6.583707036401345,
            3.372114258175067,
            -1.9170540425743237,
            -2.531828205548794,
            -0.8077250505470286,
        ];
        for (sample, want) in samples.iter().zip(expected) {
            assert!((sample.value - want).abs() < 1e-12, "{}", sample.label);
        }
    }
}
