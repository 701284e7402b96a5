use super::value_objects::js_round;

/// One tick mark along the track.
///
/// `label` is `None` on ticks that never carry text and `Some("")` on label
/// positions with no label left to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    pub index: i32,
    pub label: Option<String>,
}

impl Tick {
    pub fn text(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }
}

/// Domain service - spreads tick labels evenly over the axis
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickLabels {
    labels: Vec<String>,
}

impl TickLabels {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Steps between two labelled ticks.
    ///
    /// A single label pins to tick 0; no labels means no labelled ticks at all.
    pub fn label_step_count(&self, step_count: i32) -> Option<i32> {
        match self.labels.len() {
            0 => None,
            1 => Some(step_count.max(1) + 1),
            len => {
                let spacing = js_round(step_count as f64 / (len - 1) as f64) as i32;
                Some(spacing.max(1))
            }
        }
    }

    /// Build `step_count + 1` ticks, labelling every `label_step_count`-th one.
    pub fn ticks(&self, step_count: i32) -> Vec<Tick> {
        let spacing = self.label_step_count(step_count);
        (0..=step_count.max(0))
            .map(|index| {
                let label = spacing.filter(|s| index % s == 0).map(|s| {
                    let slot = js_round(index as f64 / s as f64) as usize;
                    self.labels.get(slot).cloned().unwrap_or_default()
                });
                Tick { index, label }
            })
            .collect()
    }
}

/// Domain service - tooltip text for each value offset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TooltipLabels {
    labels: Vec<String>,
}

impl TooltipLabels {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Label at `offset`, or the offset itself when there is none.
    pub fn text_for(&self, offset: i64) -> String {
        usize::try_from(offset)
            .ok()
            .and_then(|i| self.labels.get(i))
            .cloned()
            .unwrap_or_else(|| offset.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> TickLabels {
        TickLabels::new(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn no_labels_leave_every_tick_bare() {
        let ticks = TickLabels::default().ticks(4);
        assert_eq!(ticks.len(), 5);
        assert!(ticks.iter().all(|t| t.label.is_none()));
    }

    #[test]
    fn single_label_sits_on_first_tick() {
        let ticks = labels(&["only"]).ticks(6);
        assert_eq!(ticks[0].text(), "only");
        assert!(ticks[1..].iter().all(|t| t.label.is_none()));
    }

    #[test]
    fn dense_labels_keep_spacing_positive() {
        assert_eq!(labels(&["a", "b", "c", "d", "e"]).label_step_count(2), Some(1));
    }

    #[test]
    fn tooltip_falls_back_to_offset() {
        let tooltip = TooltipLabels::new(vec!["zero".into()]);
        assert_eq!(tooltip.text_for(0), "zero");
        assert_eq!(tooltip.text_for(3), "3");
        assert_eq!(tooltip.text_for(-1), "-1");
    }
}
