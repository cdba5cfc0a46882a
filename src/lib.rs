pub mod configuration;

pub mod cache {
    pub mod holidaytype;
    pub mod dayrecord;
    pub mod yearsummary;
    pub mod workdaycache;
    pub mod sharedworkdaycache;
}

pub mod loader {
    pub mod configerror;
    pub mod holidayoverride;
}

pub mod time {
    pub mod utility;
    pub mod rangeofdates;
    pub mod workdaycalendar;
}
