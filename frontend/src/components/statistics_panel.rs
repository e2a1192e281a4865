use shared::Statistics;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatisticsPanelProps {
    pub statistics: Statistics,
}

#[function_component(StatisticsPanel)]
pub fn statistics_panel(props: &StatisticsPanelProps) -> Html {
    let stats = props.statistics;
    let tiles = [
        ("totalAnimals", "Total", stats.total),
        ("availableAnimals", "Available", stats.available),
        ("adoptedAnimals", "Adopted", stats.adopted),
        ("treatmentAnimals", "In Treatment", stats.in_treatment),
        ("quarantineAnimals", "Quarantine", stats.quarantine),
    ];

    html! {
        <section class="statistics">
            {for tiles.iter().map(|(id, label, count)| html! {
                <div class="stat-card">
                    <span class="stat-number" id={*id}>{count.to_string()}</span>
                    <span class="stat-label">{*label}</span>
                </div>
            })}
        </section>
    }
}
