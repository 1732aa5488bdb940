pub mod configuration;

pub mod engine {
    pub mod comparisonbucket;
    pub mod comparisonengine;
    pub mod ratepair;
    pub mod termbucket;
}

pub mod math {
    pub mod round;
}

pub mod rate {
    pub mod ratecalculator;
}

pub mod report {
    pub mod consolereportsink;
    pub mod csvreportsink;
    pub mod reportsink;
}

pub mod series {
    pub mod accrualseries;
    pub mod accrualseriesbuilder;
    pub mod dailyobservation;
    pub mod rateseries;
    pub mod ratedatasource;
}

pub mod time {
    pub mod businessdaycalendar;
}
