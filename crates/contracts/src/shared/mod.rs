pub mod form_envelope;
