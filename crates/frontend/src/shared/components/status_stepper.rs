use contracts::enums::ProzessStatus;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepState {
    Done,
    Current,
    Open,
}

/// Steps of the flow `status` belongs to, each with its state
pub fn steps_for(status: &str) -> Vec<(ProzessStatus, StepState)> {
    let Some(current) = ProzessStatus::parse(status) else {
        return Vec::new();
    };
    let steps: Vec<ProzessStatus> = if current.is_certificate_state() {
        ProzessStatus::ausweis_steps().to_vec()
    } else {
        ProzessStatus::pv_steps().to_vec()
    };
    let current_idx = current.step_index();
    steps
        .into_iter()
        .enumerate()
        .map(|(idx, step)| {
            let state = if idx < current_idx {
                StepState::Done
            } else if idx == current_idx {
                StepState::Current
            } else {
                StepState::Open
            };
            (step, state)
        })
        .collect()
}

#[component]
pub fn StatusStepper(#[prop(into)] status: Signal<String>) -> impl IntoView {
    view! {
        <ol class="stepper">
            {move || {
                steps_for(&status.get())
                    .into_iter()
                    .map(|(step, state)| {
                        let class = match state {
                            StepState::Done => "stepper__step stepper__step--done",
                            StepState::Current => "stepper__step stepper__step--current",
                            StepState::Open => "stepper__step",
                        };
                        view! { <li class=class>{step.label()}</li> }
                    })
                    .collect_view()
            }}
        </ol>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_of_pv_flow() {
        let steps = steps_for("AngebotGemacht");
        assert_eq!(steps.len(), 9);
        assert_eq!(steps[2].1, StepState::Done);
        assert_eq!(steps[3], (ProzessStatus::AngebotGemacht, StepState::Current));
        assert_eq!(steps[4].1, StepState::Open);
    }

    #[test]
    fn test_steps_of_certificate_flow() {
        let steps = steps_for("AusweisAngefordert");
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[2].1, StepState::Current);
    }

    #[test]
    fn test_unknown_status_has_no_steps() {
        assert!(steps_for("irgendwas").is_empty());
    }
}
