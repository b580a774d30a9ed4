pub mod a001_pv_antrag;
pub mod a002_angebot;
pub mod a003_installationsplan;
pub mod a004_energieausweis;
pub mod a005_effizienzmassnahme;
pub mod a006_haushaltsdaten;
pub mod a007_rechnung;
pub mod a008_vertrag;
pub mod a009_smart_meter;
