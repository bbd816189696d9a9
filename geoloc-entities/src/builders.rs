pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{address_builder::*, location_builder::*};

pub mod location_builder {

    use super::*;
    use crate::{address::*, geo::*, id::*, location::*};

    #[derive(Debug)]
    pub struct LocationBuild {
        location: Location,
    }

    impl LocationBuild {
        pub fn name(mut self, name: &str) -> Self {
            self.location.name = name.into();
            self
        }
        pub fn address(mut self, address: Address) -> Self {
            self.location.address = address;
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.location.pos = Some(pos);
            self
        }
        pub fn finish(self) -> Location {
            self.location
        }
    }

    impl Builder for Location {
        type Build = LocationBuild;
        fn build() -> Self::Build {
            LocationBuild {
                location: Location {
                    id: Id::new(),
                    name: String::new(),
                    address: Address::default(),
                    pos: None,
                },
            }
        }
    }
}

pub mod address_builder {

    use super::*;
    use crate::address::*;

    #[derive(Debug)]
    pub struct AddressBuild {
        addr: Address,
    }

    impl AddressBuild {
        pub fn street(mut self, x: &str) -> Self {
            self.addr.street = x.into();
            self
        }
        pub fn city(mut self, x: &str) -> Self {
            self.addr.city = x.into();
            self
        }
        pub fn state(mut self, x: &str) -> Self {
            self.addr.state = x.into();
            self
        }
        pub fn zip(mut self, x: &str) -> Self {
            self.addr.zip = x.into();
            self
        }
        pub fn finish(self) -> Address {
            self.addr
        }
    }

    impl Builder for Address {
        type Build = AddressBuild;
        fn build() -> Self::Build {
            AddressBuild {
                addr: Address::default(),
            }
        }
    }
}
