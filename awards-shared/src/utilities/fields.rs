pub mod dynamodb {
    pub const MOVIE_ID_FIELD: &str = "movieId";
    pub const AWARD_BODY_FIELD: &str = "awardBody";
    pub const NUM_AWARDS_FIELD: &str = "numAwards";
    pub const MIN_AWARDS_PLACEHOLDER: &str = "min";
}

pub mod path {
    pub const MOVIE_ID_PARAM: &str = "movieId";
    pub const AWARD_BODY_PARAM: &str = "awardBody";
    pub const MIN_AWARDS_PARAM: &str = "min";
}
