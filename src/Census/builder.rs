use crate::Core::Rack;

enum SlotPlan {
    Census,
    Blank,
    Gap,
}

/// Fluent construction of a populated rack.
pub struct RackBuilder {
    sample_rate: f32,
    layout: Vec<SlotPlan>,
}

impl Default for RackBuilder {
    fn default() -> Self {
        Self {
            sample_rate: 48_000.0, // audio-rate default
            layout: Vec::new(),
        }
    }
}

impl RackBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sample_rate(mut self, sample_rate: f32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Append `count` census modules to the right end of the planned row.
    pub fn with_chain(mut self, count: usize) -> Self {
        for _ in 0..count {
            self.layout.push(SlotPlan::Census);
        }
        self
    }

    /// Append a non-cooperating module; it splits any chain around it.
    pub fn with_blank(mut self) -> Self {
        self.layout.push(SlotPlan::Blank);
        self
    }

    /// Append an empty slot; like a blank, it splits any chain around it.
    pub fn with_gap(mut self) -> Self {
        self.layout.push(SlotPlan::Gap);
        self
    }

    pub fn build(self) -> std::io::Result<Rack> {
        let rack = Rack::new(self.sample_rate)?;
        for plan in &self.layout {
            let end = rack.len();
            match plan {
                SlotPlan::Census => {
                    rack.insert_census(end)?;
                }
                SlotPlan::Blank => {
                    rack.insert_blank(end)?;
                }
                SlotPlan::Gap => {
                    rack.insert_gap(end)?;
                }
            }
        }
        Ok(rack)
    }
}
