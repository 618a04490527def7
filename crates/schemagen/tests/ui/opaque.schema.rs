// Code generated by "schemagen --type Ticket". DO NOT EDIT.

#[allow(dead_code)]
const _: () = {
    trait __Exact<T: ?Sized> {}
    impl<T: ?Sized> __Exact<T> for T {}
    fn __exact<A: ?Sized + __Exact<B>, B: ?Sized>(_: &A) {}
    /// Stops compiling when the fields of [`Ticket`] change; re-run schemagen.
    fn lock(value: &Ticket) {
        let Ticket { code: f0, seats: f1 } = value;
        __exact::<_, required::Alphanumeric<String>>(f0);
        __exact::<_, Vec<optional::Even<u32>>>(f1);
    }
};
/// Type phase of every field of [`Ticket`], then their cross-field hooks.
impl ::vouch_validator::TypeValidate for Ticket {
    fn type_validate(
        &mut self,
    ) -> ::core::result::Result<(), ::vouch_validator::ValidationError> {
        let v1 = &mut self.code;
        if let ::core::result::Result::Err(err1) = ::vouch_validator::TypeValidate::type_validate(
            v1,
        ) {
            return ::core::result::Result::Err(
                err1.within(&::vouch_validator::FieldPath::root().field("code")),
            );
        }
        for (i1, v2) in self.seats.iter_mut().enumerate() {
            if let ::core::result::Result::Err(err2) = ::vouch_validator::TypeValidate::type_validate(
                v2,
            ) {
                return ::core::result::Result::Err(
                    err2
                        .within(
                            &::vouch_validator::FieldPath::root()
                                .field("seats")
                                .index(&i1),
                        ),
                );
            }
        }
        ::core::result::Result::Ok(())
    }
}
impl ::vouch_validator::Reflect for Ticket {
    fn as_type_validate(
        &mut self,
    ) -> ::core::option::Option<&mut dyn ::vouch_validator::TypeValidate> {
        ::core::option::Option::Some(self)
    }
}
