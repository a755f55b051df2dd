use super::{bind, setter};
use crate::{
    components::ui::{SelectField, TextArea, TextField, same_label},
    features::{
        requests::types::{RequestForm, TRANSPORTATION, URGENCY_LEVELS},
        users::types::BLOOD_TYPES,
    },
};
use leptos::prelude::*;

/// Inputs for a blood request, used by the public and dashboard forms.
#[component]
pub fn RequestFields(form: RwSignal<RequestForm>) -> impl IntoView {
    view! {
        <div class="grid gap-5 md:grid-cols-2">
            <TextField
                label="Patient name"
                id="patient_name"
                required=true
                value=bind(form, |f| &f.patient_name)
                on_input=setter(form, |f| &mut f.patient_name)
            />
            <SelectField
                label="Blood type"
                id="blood_type"
                required=true
                placeholder="Select blood type"
                options=same_label(&BLOOD_TYPES)
                value=bind(form, |f| &f.blood_type)
                on_change=setter(form, |f| &mut f.blood_type)
            />
            <TextField
                label="Units needed"
                id="quantity"
                input_type="number"
                required=true
                value=bind(form, |f| &f.quantity)
                on_input=setter(form, |f| &mut f.quantity)
            />
            <SelectField
                label="Urgency"
                id="urgency"
                placeholder="Select urgency"
                options=same_label(&URGENCY_LEVELS)
                value=bind(form, |f| &f.urgency)
                on_change=setter(form, |f| &mut f.urgency)
            />
            <TextField
                label="Request date"
                id="request_date"
                input_type="date"
                value=bind(form, |f| &f.request_date)
                on_input=setter(form, |f| &mut f.request_date)
            />
            <TextField
                label="Donation point"
                id="donation_point"
                required=true
                placeholder="Hospital or blood bank"
                value=bind(form, |f| &f.donation_point)
                on_input=setter(form, |f| &mut f.donation_point)
            />
            <TextField
                label="Hospital name"
                id="hospital_name"
                value=bind(form, |f| &f.hospital_name)
                on_input=setter(form, |f| &mut f.hospital_name)
            />
            <TextField
                label="Contact number"
                id="contact_number"
                input_type="tel"
                required=true
                value=bind(form, |f| &f.contact_number)
                on_input=setter(form, |f| &mut f.contact_number)
            />
            <TextField
                label="Email"
                id="email"
                input_type="email"
                value=bind(form, |f| &f.email)
                on_input=setter(form, |f| &mut f.email)
            />
            <SelectField
                label="Transportation"
                id="transportation"
                placeholder="Select transportation"
                options=vec![(TRANSPORTATION[0], "Provided"), (TRANSPORTATION[1], "Not provided")]
                value=bind(form, |f| &f.transportation)
                on_change=setter(form, |f| &mut f.transportation)
            />
            <div class="md:col-span-2">
                <TextArea
                    label="Description"
                    id="description"
                    value=bind(form, |f| &f.description)
                    on_input=setter(form, |f| &mut f.description)
                />
            </div>
        </div>
    }
}
