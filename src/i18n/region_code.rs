pub struct RegionCode {
}

impl RegionCode {
    /// Returns a region code string representing the "unknown" region.
    pub fn get_unknown() -> &'static str {
        return Self::zz();
    }

    /// Region used when the caller does not provide one.
    pub fn get_default() -> &'static str {
        return Self::us();
    }

    pub fn us() -> &'static str {
        return "US";
    }

    /// Region of non-geographic entities such as `+800` freephone numbers.
    pub fn un001() -> &'static str {
        return "001";
    }

    pub fn zz() -> &'static str {
        return "ZZ";
    }
}
