//! Requests shared by the registry pages. Every mutation re-fetches the list.

use api::RegistryEndpoint;
use dioxus::prelude::*;
use scheduler_core::view::RegistryState;

async fn reload<E: RegistryEndpoint>(mut state: Signal<RegistryState<E>>) {
    match api::client().list_entries::<E>().await {
        Ok(items) => state.write().list_loaded(items),
        Err(e) => state.write().list_failed(&e),
    }
}

pub(crate) fn refresh<E: RegistryEndpoint>(state: Signal<RegistryState<E>>) {
    spawn(reload(state));
}

/// Create or update from the open editor.
pub(crate) fn save<E: RegistryEndpoint>(mut state: Signal<RegistryState<E>>) {
    let write = state.write().begin_save();
    let Some(write) = write else {
        return;
    };

    spawn(async move {
        let key = write.key();
        match api::client().write_entry(&write).await {
            Ok(saved) => {
                tracing::info!(entity = E::NOUN, id = %saved.id(), "saved");
                state.write().save_succeeded(key);
                reload(state).await;
            }
            Err(e) => state.write().save_failed(key, &e),
        }
    });
}

/// Delete the record awaiting confirmation, if any.
pub(crate) fn confirm_delete<E: RegistryEndpoint>(mut state: Signal<RegistryState<E>>) {
    let target = state.write().confirm_delete();
    let Some(id) = target else {
        return;
    };

    spawn(async move {
        match api::client().delete_entry::<E>(id).await {
            Ok(()) => reload(state).await,
            Err(e) => state.write().delete_failed(&e),
        }
    });
}
