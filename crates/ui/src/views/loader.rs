use dioxus::prelude::*;

use crate::vm::{HEARTBEAT_INTERVAL, HEARTBEAT_PHASES, LoaderVm, TIP_INTERVAL};

#[component]
pub fn Loader() -> Element {
    let loader = use_signal(LoaderVm::default);

    use_future(move || async move {
        let mut loader = loader;
        loop {
            tokio::time::sleep(TIP_INTERVAL).await;
            loader.with_mut(LoaderVm::advance_tip);
        }
    });
    use_future(move || async move {
        let mut loader = loader;
        loop {
            tokio::time::sleep(HEARTBEAT_INTERVAL).await;
            loader.with_mut(LoaderVm::advance_heartbeat);
        }
    });

    let vm = loader();
    let phase = vm.heartbeat_phase();

    rsx! {
        section { class: "loader card",
            div { class: "loader-icon", "🩺" }
            div { class: "heartbeat",
                for dot in 0..HEARTBEAT_PHASES {
                    span {
                        key: "{dot}",
                        class: if dot == phase { "beat active" } else { "beat" },
                    }
                }
            }
            p { class: "loader-tip", "{vm.tip()}" }
        }
    }
}
